//! Assembles pickup payloads: a pickup row, a random address, and a future
//! scheduling window.

use rand::Rng;
use serde_json::Value;

use crate::catalog;
use crate::client::{EntityKind, ShippingClient};
use crate::dates;
use crate::domain::ParamMap;
use crate::error::Error;
use crate::generators::addresses;
use crate::sampling;

pub fn random_map(rng: &mut impl Rng) -> Result<ParamMap, Error> {
    let mut map = sampling::sample_fixture_one(&catalog::PICKUPS, rng)?;
    let address = addresses::random_map(None, None, rng)?;

    // future_dates is strictly increasing, so the window is always non-empty
    let window = dates::future_dates(2, rng);
    map.insert("address".to_string(), Value::Object(address));
    map.insert(
        "min_datetime".to_string(),
        Value::String(dates::to_api_string(window[0])),
    );
    map.insert(
        "max_datetime".to_string(),
        Value::String(dates::to_api_string(window[1])),
    );
    Ok(map)
}

pub fn create(client: &impl ShippingClient, rng: &mut impl Rng) -> Result<Value, Error> {
    let map = random_map(rng)?;
    client.create(EntityKind::Pickup, &map)
}
