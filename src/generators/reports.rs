//! Assembles report payloads: a report type and a past date range.

use rand::Rng;
use serde_json::{Value, json};

use crate::client::{EntityKind, ShippingClient};
use crate::dates;
use crate::domain::ParamMap;
use crate::error::Error;
use crate::random;

pub const REPORT_TYPES: [&str; 5] = ["cash_flow", "payment_log", "refund", "shipment", "tracker"];

pub fn random_map(rng: &mut impl Rng) -> ParamMap {
    // past_dates is strictly decreasing: the second date is the older one
    let window = dates::past_dates(2, rng);

    let mut map = ParamMap::new();
    map.insert("type".to_string(), json!(random::pick(&REPORT_TYPES, rng)));
    map.insert(
        "start_date".to_string(),
        Value::String(dates::to_api_string(window[1])),
    );
    map.insert(
        "end_date".to_string(),
        Value::String(dates::to_api_string(window[0])),
    );
    map
}

pub fn create(client: &impl ShippingClient, rng: &mut impl Rng) -> Result<Value, Error> {
    let map = random_map(rng);
    client.create(EntityKind::Report, &map)
}
