//! Assembles parcel payloads: randomized dimensions and weight within
//! carrier-plausible bounds.

use rand::Rng;
use serde_json::{Value, json};

use crate::client::{EntityKind, ShippingClient};
use crate::domain::ParamMap;
use crate::error::Error;
use crate::random;

// Inches and ounces, the units the API expects.
const LENGTH_RANGE: (f64, f64) = (4.0, 40.0);
const WIDTH_RANGE: (f64, f64) = (4.0, 30.0);
const HEIGHT_RANGE: (f64, f64) = (2.0, 20.0);
const WEIGHT_RANGE: (f64, f64) = (1.0, 120.0);

pub fn random_map(rng: &mut impl Rng) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("length".to_string(), json!(dimension(LENGTH_RANGE, rng)));
    map.insert("width".to_string(), json!(dimension(WIDTH_RANGE, rng)));
    map.insert("height".to_string(), json!(dimension(HEIGHT_RANGE, rng)));
    map.insert("weight".to_string(), json!(dimension(WEIGHT_RANGE, rng)));
    map
}

pub fn create(client: &impl ShippingClient, rng: &mut impl Rng) -> Result<Value, Error> {
    let map = random_map(rng);
    client.create(EntityKind::Parcel, &map)
}

fn dimension((min, max): (f64, f64), rng: &mut impl Rng) -> f64 {
    round_tenth(random::float_in_range(min, max, rng))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
