//! Assembles address payloads: a single random address, or a batch whose
//! members are related by state or country.

use rand::Rng;
use serde_json::Value;

use crate::catalog;
use crate::client::{EntityKind, ShippingClient};
use crate::domain::{AddressRelationship, Country, ParamMap, UsState};
use crate::error::Error;
use crate::random;
use crate::sampling::{self, DuplicatePolicy};

/// One address drawn from the fixture the selection resolves to.
/// With neither selector, the fixture is chosen by the random fallback policy.
pub fn random_map(
    country: Option<Country>,
    state: Option<UsState>,
    rng: &mut impl Rng,
) -> Result<ParamMap, Error> {
    let fixture = catalog::resolve(country, state, rng);
    sampling::sample_fixture_one(fixture, rng)
}

/// `amount` distinct addresses, all from one randomly chosen state.
pub fn same_state_maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    let state = random::pick(&UsState::ALL, rng);
    sampling::sample_fixture(
        catalog::state_addresses(state),
        amount,
        DuplicatePolicy::Forbidden,
        rng,
    )
}

/// `amount` addresses, each from a different state. Bounded by the number of
/// supported states.
pub fn different_state_maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    let states = sampling::sample(&UsState::ALL, amount, DuplicatePolicy::Forbidden, rng)?;
    states
        .into_iter()
        .map(|state| random_map(None, Some(state), rng))
        .collect()
}

/// `amount` distinct addresses, all from one randomly chosen country.
pub fn same_country_maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    let country = random::pick(&Country::ALL, rng);
    sampling::sample_fixture(
        catalog::country_addresses(country),
        amount,
        DuplicatePolicy::Forbidden,
        rng,
    )
}

/// `amount` addresses, each from a different country. Bounded by the number of
/// supported countries.
pub fn different_country_maps(amount: usize, rng: &mut impl Rng) -> Result<Vec<ParamMap>, Error> {
    let countries = sampling::sample(&Country::ALL, amount, DuplicatePolicy::Forbidden, rng)?;
    countries
        .into_iter()
        .map(|country| random_map(Some(country), None, rng))
        .collect()
}

/// `amount` addresses related to each other as requested.
pub fn maps(
    relationship: AddressRelationship,
    amount: usize,
    rng: &mut impl Rng,
) -> Result<Vec<ParamMap>, Error> {
    match relationship {
        AddressRelationship::SameState => same_state_maps(amount, rng),
        AddressRelationship::DifferentState => different_state_maps(amount, rng),
        AddressRelationship::SameCountry => same_country_maps(amount, rng),
        AddressRelationship::DifferentCountry => different_country_maps(amount, rng),
    }
}

/// Builds one address map and forwards it to the client.
pub fn create(
    client: &impl ShippingClient,
    country: Option<Country>,
    state: Option<UsState>,
    rng: &mut impl Rng,
) -> Result<Value, Error> {
    let map = random_map(country, state, rng)?;
    client.create(EntityKind::Address, &map)
}

/// Builds a related batch and forwards each map to the client.
pub fn create_maps(
    client: &impl ShippingClient,
    relationship: AddressRelationship,
    amount: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Value>, Error> {
    maps(relationship, amount, rng)?
        .iter()
        .map(|map| client.create(EntityKind::Address, map))
        .collect()
}
