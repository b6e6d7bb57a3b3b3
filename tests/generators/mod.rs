//! Integration tests for the payload assemblers.

use std::cell::RefCell;

use chrono::NaiveDate;
use claims::{assert_matches, assert_ok};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use shipping_fixtures::generators::{
    addresses, customs, insurance, parcels, pickups, reports, shipments, trackers,
};
use shipping_fixtures::{AddressRelationship, EntityKind, Error, ParamMap, ShippingClient};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn parse_date(value: &Value) -> NaiveDate {
    NaiveDate::parse_from_str(value.as_str().expect("date field is a string"), "%Y-%m-%d")
        .expect("date field is ISO formatted")
}

#[test]
fn parcel_dimensions_stay_in_their_documented_ranges() {
    for seed in 0..20 {
        let map = parcels::random_map(&mut rng(seed));
        let value = |key: &str| map[key].as_f64().unwrap();

        assert!((4.0..=40.0).contains(&value("length")));
        assert!((4.0..=30.0).contains(&value("width")));
        assert!((2.0..=20.0).contains(&value("height")));
        assert!((1.0..=120.0).contains(&value("weight")));
    }
}

#[test]
fn customs_info_carries_one_to_three_items() {
    for seed in 0..20 {
        let map = assert_ok!(customs::info_map(&mut rng(seed)));
        assert!(map.contains_key("contents_type"));

        let items = map["customs_items"].as_array().unwrap();
        assert!((1..=3).contains(&items.len()));
        assert!(items.iter().all(|item| item.get("description").is_some()));
    }
}

#[test]
fn shipment_contains_addresses_parcel_and_options() {
    let map = assert_ok!(shipments::random_map(
        AddressRelationship::SameCountry,
        &mut rng(5)
    ));

    assert!(map["to_address"].is_object());
    assert!(map["from_address"].is_object());
    assert!(map["parcel"].is_object());
    assert!(map["carrier"].is_string());
    assert!(map["service"].is_string());

    let options = map["options"].as_object().unwrap();
    assert!(options.contains_key("label_format"));
}

#[test]
fn international_shipment_includes_customs_info() {
    let map = assert_ok!(shipments::international_map(&mut rng(6)));

    assert!(map["customs_info"].is_object());
    let to = map["to_address"].as_object().unwrap();
    let from = map["from_address"].as_object().unwrap();
    assert_ne!(to["country"], from["country"]);
}

#[test]
fn pickup_window_is_ordered_and_in_the_future() {
    let today = chrono::Local::now().date_naive();
    for seed in 0..10 {
        let map = assert_ok!(pickups::random_map(&mut rng(seed)));

        let min = parse_date(&map["min_datetime"]);
        let max = parse_date(&map["max_datetime"]);
        assert!(today < min && min < max);
        assert!(map["address"].is_object());
        assert!(map.contains_key("instructions"));
    }
}

#[test]
fn report_range_lies_in_the_past() {
    let today = chrono::Local::now().date_naive();
    for seed in 0..10 {
        let map = reports::random_map(&mut rng(seed));

        let start = parse_date(&map["start_date"]);
        let end = parse_date(&map["end_date"]);
        assert!(start < end && end < today);
        assert!(reports::REPORT_TYPES.contains(&map["type"].as_str().unwrap()));
    }
}

#[test]
fn trackers_use_the_bundled_test_codes() {
    let maps = assert_ok!(trackers::maps(5, &mut rng(8)));

    assert_eq!(maps.len(), 5);
    for map in maps {
        assert!(map["tracking_code"].as_str().unwrap().starts_with("EZ"));
        assert!(map["carrier"].is_string());
    }
}

#[test]
fn insured_shipments_carry_a_bounded_amount() {
    for seed in 0..10 {
        let map = assert_ok!(insurance::insured_shipment_map(
            AddressRelationship::SameState,
            &mut rng(seed)
        ));

        let amount = map["insurance"].as_f64().unwrap();
        assert!((1.0..=500.0).contains(&amount));
    }
}

/// Client double that records every create call and echoes the map back with an id.
#[derive(Default)]
struct RecordingClient {
    calls: RefCell<Vec<(EntityKind, ParamMap)>>,
}

impl ShippingClient for RecordingClient {
    fn create(&self, entity: EntityKind, params: &ParamMap) -> Result<Value, Error> {
        let mut calls = self.calls.borrow_mut();
        calls.push((entity, params.clone()));

        let mut created = params.clone();
        created.insert(
            "id".to_string(),
            Value::String(format!("{}_{}", entity.endpoint(), calls.len())),
        );
        Ok(Value::Object(created))
    }
}

#[test]
fn create_wrappers_forward_each_map_to_the_client() {
    let client = RecordingClient::default();

    let created = assert_ok!(addresses::create_maps(
        &client,
        AddressRelationship::DifferentState,
        3,
        &mut rng(2)
    ));

    assert_eq!(created.len(), 3);
    let calls = client.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert!(
        calls
            .iter()
            .all(|(entity, map)| *entity == EntityKind::Address && map.contains_key("street1"))
    );
}

#[test]
fn a_failing_client_propagates_its_error() {
    struct FailingClient;

    impl ShippingClient for FailingClient {
        fn create(&self, _: EntityKind, _: &ParamMap) -> Result<Value, Error> {
            Err(Error::Api {
                message: "upstream rejected the request".to_string(),
            })
        }
    }

    let err = parcels::create(&FailingClient, &mut rng(1)).unwrap_err();
    assert_matches!(err, Error::Api { .. });
}
