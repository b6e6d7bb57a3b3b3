//! Module for the types defining the fixture domain: category enumerations and record aliases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, unknown_category_value};

/// One opaque row of fixture data. Field names are domain-specific per fixture
/// (address fields, customs fields, ...); the sampler treats the row as a unit.
pub type FixtureRecord = serde_json::Map<String, serde_json::Value>;

/// The map of fields handed to the shipping API's create calls.
/// Structurally identical to a fixture record.
pub type ParamMap = FixtureRecord;

/// Countries with bundled address fixtures.
///
/// The set is a definition-time constant: adding a country means adding a
/// variant, a row in the catalog table, and a fixture file, never touching the
/// resolution logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    UnitedStates,
    Canada,
    China,
    HongKong,
    UnitedKingdom,
    Germany,
    Spain,
    Mexico,
    Australia,
}

impl Country {
    pub const ALL: [Country; 9] = [
        Country::UnitedStates,
        Country::Canada,
        Country::China,
        Country::HongKong,
        Country::UnitedKingdom,
        Country::Germany,
        Country::Spain,
        Country::Mexico,
        Country::Australia,
    ];

    /// ISO 3166-1 alpha-2 code, as it appears in the `country` field of the fixtures.
    pub fn code(self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::Canada => "CA",
            Country::China => "CN",
            Country::HongKong => "HK",
            Country::UnitedKingdom => "GB",
            Country::Germany => "DE",
            Country::Spain => "ES",
            Country::Mexico => "MX",
            Country::Australia => "AU",
        }
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_category_value(Dimension::Country, s))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// US states with bundled address fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsState {
    Arizona,
    California,
    Idaho,
    Kansas,
    Nevada,
    NewYork,
    Texas,
    Utah,
    Washington,
}

impl UsState {
    pub const ALL: [UsState; 9] = [
        UsState::Arizona,
        UsState::California,
        UsState::Idaho,
        UsState::Kansas,
        UsState::Nevada,
        UsState::NewYork,
        UsState::Texas,
        UsState::Utah,
        UsState::Washington,
    ];

    /// USPS abbreviation, as it appears in the `state` field of the fixtures.
    pub fn code(self) -> &'static str {
        match self {
            UsState::Arizona => "AZ",
            UsState::California => "CA",
            UsState::Idaho => "ID",
            UsState::Kansas => "KS",
            UsState::Nevada => "NV",
            UsState::NewYork => "NY",
            UsState::Texas => "TX",
            UsState::Utah => "UT",
            UsState::Washington => "WA",
        }
    }
}

impl FromStr for UsState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::ALL
            .into_iter()
            .find(|state| state.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_category_value(Dimension::UsState, s))
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The category axes addresses can be selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Country,
    UsState,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Country => f.write_str("country"),
            Dimension::UsState => f.write_str("state"),
        }
    }
}

/// How the addresses of a generated pair or batch relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressRelationship {
    SameState,
    DifferentState,
    SameCountry,
    DifferentCountry,
}

impl AddressRelationship {
    pub const ALL: [AddressRelationship; 4] = [
        AddressRelationship::SameState,
        AddressRelationship::DifferentState,
        AddressRelationship::SameCountry,
        AddressRelationship::DifferentCountry,
    ];
}
