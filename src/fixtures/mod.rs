//! Module for loading bundled reference data into in-memory record collections.

use crate::domain::FixtureRecord;
use crate::error::Error;

/// Identity of one bundled reference collection.
///
/// The raw JSON is embedded at compile time; the parsed collection is
/// ephemeral and owned by the caller of [`load`]. Two fixtures are the same
/// resource exactly when their names are equal.
#[derive(Debug)]
pub struct Fixture {
    name: &'static str,
    raw: &'static str,
}

impl Fixture {
    pub(crate) const fn new(name: &'static str, raw: &'static str) -> Self {
        Self { name, raw }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Fixture {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Fixture {}

/// Parses a fixture into its record collection.
///
/// Every call parses fresh; there is no cache, so each sampling operation owns
/// its own collection. A fixture must be a JSON array of flat objects.
pub fn load(fixture: &Fixture) -> Result<Vec<FixtureRecord>, Error> {
    serde_json::from_str(fixture.raw).map_err(|source| Error::Fixture {
        name: fixture.name,
        source,
    })
}
