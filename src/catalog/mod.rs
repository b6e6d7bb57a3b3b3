//! Module for the fixture catalog: the fixed category-to-resource tables and the
//! resolution policies that turn a (possibly empty) category selection into a fixture.

use rand::Rng;

use crate::domain::{Country, Dimension, UsState};
use crate::error::{Error, conflicting_selection, invalid_argument};
use crate::fixtures::Fixture;
use crate::random;


pub static CUSTOMS_ITEMS: Fixture = Fixture::new(
    "customs_items.json",
    include_str!("../../fixtures/customs_items.json"),
);
pub static CUSTOMS_INFO: Fixture = Fixture::new(
    "customs_info.json",
    include_str!("../../fixtures/customs_info.json"),
);
pub static CARRIERS: Fixture =
    Fixture::new("carriers.json", include_str!("../../fixtures/carriers.json"));
pub static LABEL_OPTIONS: Fixture = Fixture::new(
    "label_options.json",
    include_str!("../../fixtures/label_options.json"),
);
pub static TRACKERS: Fixture =
    Fixture::new("trackers.json", include_str!("../../fixtures/trackers.json"));
pub static OPTIONS: Fixture =
    Fixture::new("options.json", include_str!("../../fixtures/options.json"));
pub static PICKUPS: Fixture =
    Fixture::new("pickups.json", include_str!("../../fixtures/pickups.json"));

static US_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/us-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/us-addresses.min.json"),
);
static BC_ADDRESSES: Fixture = Fixture::new(
    "addresses/canada/bc-addresses.min.json",
    include_str!("../../fixtures/addresses/canada/bc-addresses.min.json"),
);
static BJ_ADDRESSES: Fixture = Fixture::new(
    "addresses/china/bj-addresses.min.json",
    include_str!("../../fixtures/addresses/china/bj-addresses.min.json"),
);
static HK_ADDRESSES: Fixture = Fixture::new(
    "addresses/china/hk-addresses.min.json",
    include_str!("../../fixtures/addresses/china/hk-addresses.min.json"),
);
static UK_ADDRESSES: Fixture = Fixture::new(
    "addresses/europe/uk-addresses.min.json",
    include_str!("../../fixtures/addresses/europe/uk-addresses.min.json"),
);
static DE_ADDRESSES: Fixture = Fixture::new(
    "addresses/europe/de-addresses.min.json",
    include_str!("../../fixtures/addresses/europe/de-addresses.min.json"),
);
static ES_ADDRESSES: Fixture = Fixture::new(
    "addresses/europe/es-addresses.min.json",
    include_str!("../../fixtures/addresses/europe/es-addresses.min.json"),
);
static MX_ADDRESSES: Fixture = Fixture::new(
    "addresses/mexico/mx-addresses.min.json",
    include_str!("../../fixtures/addresses/mexico/mx-addresses.min.json"),
);
static VT_ADDRESSES: Fixture = Fixture::new(
    "addresses/australia/vt-addresses.min.json",
    include_str!("../../fixtures/addresses/australia/vt-addresses.min.json"),
);

static AZ_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/az-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/az-addresses.min.json"),
);
static CA_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/ca-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/ca-addresses.min.json"),
);
static ID_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/id-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/id-addresses.min.json"),
);
static KS_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/ks-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/ks-addresses.min.json"),
);
static NV_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/nv-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/nv-addresses.min.json"),
);
static NY_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/ny-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/ny-addresses.min.json"),
);
static TX_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/tx-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/tx-addresses.min.json"),
);
static UT_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/ut-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/ut-addresses.min.json"),
);
static WA_ADDRESSES: Fixture = Fixture::new(
    "addresses/united-states/wa-addresses.min.json",
    include_str!("../../fixtures/addresses/united-states/wa-addresses.min.json"),
);

/// The address fixture backing a country. Fixed at definition time.
pub fn country_addresses(country: Country) -> &'static Fixture {
    match country {
        Country::UnitedStates => &US_ADDRESSES,
        Country::Canada => &BC_ADDRESSES,
        Country::China => &BJ_ADDRESSES,
        Country::HongKong => &HK_ADDRESSES,
        Country::UnitedKingdom => &UK_ADDRESSES,
        Country::Germany => &DE_ADDRESSES,
        Country::Spain => &ES_ADDRESSES,
        Country::Mexico => &MX_ADDRESSES,
        Country::Australia => &VT_ADDRESSES,
    }
}

/// The address fixture backing a US state. Fixed at definition time.
pub fn state_addresses(state: UsState) -> &'static Fixture {
    match state {
        UsState::Arizona => &AZ_ADDRESSES,
        UsState::California => &CA_ADDRESSES,
        UsState::Idaho => &ID_ADDRESSES,
        UsState::Kansas => &KS_ADDRESSES,
        UsState::Nevada => &NV_ADDRESSES,
        UsState::NewYork => &NY_ADDRESSES,
        UsState::Texas => &TX_ADDRESSES,
        UsState::Utah => &UT_ADDRESSES,
        UsState::Washington => &WA_ADDRESSES,
    }
}

/// Resolves a partial category selection to an address fixture.
///
/// Dimensions are evaluated in priority order: a country selector wins over a
/// state selector. With neither present, a dimension is picked uniformly at
/// random and then a value uniformly within it. The resulting distribution
/// over fixtures is the two-step one (uniform over dimensions, then uniform
/// within the chosen dimension), not a flat draw over the union of all values.
pub fn resolve(
    country: Option<Country>,
    state: Option<UsState>,
    rng: &mut impl Rng,
) -> &'static Fixture {
    if let Some(country) = country {
        return country_addresses(country);
    }
    if let Some(state) = state {
        return state_addresses(state);
    }
    if random::bool_value(rng) {
        country_addresses(random::pick(&Country::ALL, rng))
    } else {
        state_addresses(random::pick(&UsState::ALL, rng))
    }
}

/// Strict variant of [`resolve`]: at least one selector is required.
///
/// `UnitedStates` alone resolves to a uniformly random state fixture, since a
/// concrete US address always lives in some state's file. A state selector may
/// accompany `UnitedStates` (the state wins), but combining a state with any
/// other country is a conflicting selection: the state table is US-only.
pub fn resolve_required(
    country: Option<Country>,
    state: Option<UsState>,
    rng: &mut impl Rng,
) -> Result<&'static Fixture, Error> {
    match (country, state) {
        (None, None) => Err(invalid_argument(
            "either a country or a state must be selected",
        )),
        (Some(Country::UnitedStates), Some(state)) => Ok(state_addresses(state)),
        (Some(Country::UnitedStates), None) => {
            Ok(state_addresses(random::pick(&UsState::ALL, rng)))
        }
        (Some(country), Some(state)) => Err(conflicting_selection(format!(
            "state {state} cannot be combined with country {country}"
        ))),
        (Some(country), None) => Ok(country_addresses(country)),
        (None, Some(state)) => Ok(state_addresses(state)),
    }
}

/// Resolves a single, fully specified dimension/value pair, without randomization.
///
/// Fails with [`Error::UnknownCategoryValue`] when the code is not a member of
/// the dimension's enumeration. Pure: identical input yields the identical
/// fixture identity.
pub fn resolve_within_dimension(
    dimension: Dimension,
    code: &str,
) -> Result<&'static Fixture, Error> {
    match dimension {
        Dimension::Country => Ok(country_addresses(code.parse()?)),
        Dimension::UsState => Ok(state_addresses(code.parse()?)),
    }
}
