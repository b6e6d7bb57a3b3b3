//! Assembles shipment payloads: a to/from address pair related as requested,
//! a parcel, and sampled carrier/label options.

use rand::Rng;
use serde_json::{Value, json};

use crate::catalog;
use crate::client::{EntityKind, ShippingClient};
use crate::domain::{AddressRelationship, ParamMap};
use crate::error::Error;
use crate::generators::{addresses, customs, parcels};
use crate::random;
use crate::sampling;

pub fn random_map(
    relationship: AddressRelationship,
    rng: &mut impl Rng,
) -> Result<ParamMap, Error> {
    let mut pair = addresses::maps(relationship, 2, rng)?.into_iter();
    let to = pair.next().expect("two addresses were requested");
    let from = pair.next().expect("two addresses were requested");

    let mut map = ParamMap::new();
    map.insert("to_address".to_string(), Value::Object(to));
    map.insert("from_address".to_string(), Value::Object(from));
    map.insert(
        "parcel".to_string(),
        Value::Object(parcels::random_map(rng)),
    );
    map.insert("options".to_string(), Value::Object(options_map(rng)?));
    map.insert(
        "reference".to_string(),
        json!(format!("fx-{}", random::alphanumeric_string(8, rng))),
    );
    map.extend(sampling::sample_fixture_one(&catalog::CARRIERS, rng)?);
    Ok(map)
}

/// A cross-border shipment: different-country address pair plus customs info.
pub fn international_map(rng: &mut impl Rng) -> Result<ParamMap, Error> {
    let mut map = random_map(AddressRelationship::DifferentCountry, rng)?;
    map.insert(
        "customs_info".to_string(),
        Value::Object(customs::info_map(rng)?),
    );
    Ok(map)
}

pub fn create(
    client: &impl ShippingClient,
    relationship: AddressRelationship,
    rng: &mut impl Rng,
) -> Result<Value, Error> {
    let map = random_map(relationship, rng)?;
    client.create(EntityKind::Shipment, &map)
}

fn options_map(rng: &mut impl Rng) -> Result<ParamMap, Error> {
    let mut options = sampling::sample_fixture_one(&catalog::OPTIONS, rng)?;
    options.extend(sampling::sample_fixture_one(&catalog::LABEL_OPTIONS, rng)?);
    Ok(options)
}
