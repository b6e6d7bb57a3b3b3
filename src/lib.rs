//! Test-data generation for a shipping API client.
//!
//! Builds randomized-but-valid request payloads — addresses, parcels,
//! shipments, customs data, pickups, reports, trackers — by sampling bundled
//! reference fixtures and combining the sampled rows into parameter maps. The
//! maps can be used directly or forwarded to an API client through
//! [`ShippingClient`].
//!
//! The two pieces everything else builds on:
//!
//! - [`catalog`] resolves a (possibly empty) category selection — country,
//!   US state — to the bundled fixture backing it, with a random fallback
//!   when nothing is selected.
//! - [`sampling`] draws `count` records from a loaded collection, with or
//!   without replacement, without ever mutating the caller's data.
//!
//! Randomness always comes from a caller-supplied [`rand::Rng`], so every
//! generator is reproducible with a seeded source.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use shipping_fixtures::AddressRelationship;
//! use shipping_fixtures::generators::addresses;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let pair = addresses::maps(AddressRelationship::SameState, 2, &mut rng).unwrap();
//! assert_eq!(pair.len(), 2);
//! ```

pub mod catalog;
mod client;
pub mod dates;
mod domain;
mod error;
pub mod fixtures;
pub mod generators;
pub mod random;
pub mod sampling;
mod telemetry;

pub use client::{Config, EntityKind, ShippingClient};
pub use domain::{AddressRelationship, Country, Dimension, FixtureRecord, ParamMap, UsState};
pub use error::Error;
pub use telemetry::setup_logging;
