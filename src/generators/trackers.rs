//! Assembles tracker payloads from the bundled test tracking codes.

use rand::Rng;
use serde_json::Value;

use crate::catalog;
use crate::client::{EntityKind, ShippingClient};
use crate::domain::ParamMap;
use crate::error::Error;
use crate::sampling::{self, DuplicatePolicy};

pub fn random_map(rng: &mut impl Rng) -> Result<ParamMap, Error> {
    sampling::sample_fixture_one(&catalog::TRACKERS, rng)
}

/// `amount` tracker maps; the same test code may repeat.
pub fn maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    sampling::sample_fixture(&catalog::TRACKERS, amount, DuplicatePolicy::Allowed, rng)
}

pub fn create(client: &impl ShippingClient, rng: &mut impl Rng) -> Result<Value, Error> {
    let map = random_map(rng)?;
    client.create(EntityKind::Tracker, &map)
}
