//! Module defining the boundary to the wrapped shipping API.
//!
//! The API itself is an external collaborator: this crate only assembles
//! parameter maps and hands them to whatever implements [`ShippingClient`].

use serde::Serialize;
use serde_json::Value;

use crate::domain::ParamMap;
use crate::error::Error;

/// Credentials for a client implementation.
///
/// Always passed explicitly to the implementation that needs it; the crate
/// never stores a process-global key and never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// The entity kinds the wrapped API can create from a parameter map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Address,
    Parcel,
    Shipment,
    CustomsItem,
    CustomsInfo,
    Pickup,
    Report,
    Tracker,
}

impl EntityKind {
    /// The API resource the entity is created under.
    pub fn endpoint(self) -> &'static str {
        match self {
            EntityKind::Address => "addresses",
            EntityKind::Parcel => "parcels",
            EntityKind::Shipment => "shipments",
            EntityKind::CustomsItem => "customs_items",
            EntityKind::CustomsInfo => "customs_infos",
            EntityKind::Pickup => "pickups",
            EntityKind::Report => "reports",
            EntityKind::Tracker => "trackers",
        }
    }
}

/// Creates API entities from parameter maps.
///
/// Implementations own transport and authentication. Failures surface as
/// [`Error::Api`]; the generators propagate them unchanged.
///
/// # Example
///
/// ```
/// use serde_json::Value;
/// use shipping_fixtures::{Config, EntityKind, Error, ParamMap, ShippingClient};
///
/// struct DryRunClient {
///     config: Config,
/// }
///
/// impl ShippingClient for DryRunClient {
///     fn create(&self, entity: EntityKind, params: &ParamMap) -> Result<Value, Error> {
///         let mut echoed = params.clone();
///         echoed.insert(
///             "object".to_string(),
///             Value::String(entity.endpoint().to_string()),
///         );
///         Ok(Value::Object(echoed))
///     }
/// }
///
/// let client = DryRunClient {
///     config: Config::new("EZTK-test"),
/// };
/// assert_eq!(client.config.api_key(), "EZTK-test");
/// ```
pub trait ShippingClient {
    fn create(&self, entity: EntityKind, params: &ParamMap) -> Result<Value, Error>;
}
