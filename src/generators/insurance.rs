//! Attaches randomized insurance to shipment payloads.

use rand::Rng;
use serde_json::json;

use crate::domain::{AddressRelationship, ParamMap};
use crate::error::Error;
use crate::generators::shipments;
use crate::random;

const AMOUNT_RANGE: (f64, f64) = (1.0, 500.0);

/// A randomized insured value, in whole cents.
pub fn amount(rng: &mut impl Rng) -> f64 {
    let (min, max) = AMOUNT_RANGE;
    (random::float_in_range(min, max, rng) * 100.0).round() / 100.0
}

/// A shipment map carrying an `insurance` amount.
pub fn insured_shipment_map(
    relationship: AddressRelationship,
    rng: &mut impl Rng,
) -> Result<ParamMap, Error> {
    let mut map = shipments::random_map(relationship, rng)?;
    map.insert("insurance".to_string(), json!(amount(rng)));
    Ok(map)
}
