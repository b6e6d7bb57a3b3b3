//! Assembles customs payloads: item rows sampled from the customs-items
//! fixture, and a customs-info map carrying a handful of them.

use rand::Rng;
use serde_json::Value;

use crate::catalog;
use crate::client::{EntityKind, ShippingClient};
use crate::domain::ParamMap;
use crate::error::Error;
use crate::random;
use crate::sampling::{self, DuplicatePolicy};

/// `amount` customs item rows; repeats are fine, a shipment can carry several
/// of the same item.
pub fn items_maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    sampling::sample_fixture(&catalog::CUSTOMS_ITEMS, amount, DuplicatePolicy::Allowed, rng)
}

/// A customs-info map with 1 to 3 item rows attached.
pub fn info_map(rng: &mut impl Rng) -> Result<ParamMap, Error> {
    let mut info = sampling::sample_fixture_one(&catalog::CUSTOMS_INFO, rng)?;
    let amount = random::int_in_range(1, 3, rng) as usize;
    let items = items_maps(amount, rng)?;
    info.insert(
        "customs_items".to_string(),
        Value::Array(items.into_iter().map(Value::Object).collect()),
    );
    Ok(info)
}

pub fn create_info(client: &impl ShippingClient, rng: &mut impl Rng) -> Result<Value, Error> {
    let map = info_map(rng)?;
    client.create(EntityKind::CustomsInfo, &map)
}

pub fn create_items(
    client: &impl ShippingClient,
    amount: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Value>, Error> {
    items_maps(amount, rng)?
        .iter()
        .map(|map| client.create(EntityKind::CustomsItem, map))
        .collect()
}
