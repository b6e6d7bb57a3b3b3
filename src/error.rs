//! Module defining the errors which are exposed to the users of the crate

use crate::domain::Dimension;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed request, e.g. a selection policy that required a selector none was given for
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Unique sampling requested for more records than the collection holds
    #[error("cannot draw {requested} unique records from a population of {available}")]
    InsufficientPopulation { requested: usize, available: usize },

    /// A category code outside the fixed enumeration of the dimension
    #[error("unknown {dimension} code: {value}")]
    UnknownCategoryValue { dimension: Dimension, value: String },

    /// Mutually exclusive selectors supplied together
    #[error("conflicting selection: {message}")]
    ConflictingSelection { message: String },

    /// A bundled fixture did not parse as an array of flat records
    #[error("fixture {name} is malformed: {source}")]
    Fixture {
        name: &'static str,
        source: serde_json::Error,
    },

    /// Reported by `ShippingClient` implementations when a create call fails
    #[error("shipping API error: {message}")]
    Api { message: String },
}

pub(crate) fn invalid_argument(message: impl Into<String>) -> Error {
    Error::InvalidArgument {
        message: message.into(),
    }
}

pub(crate) fn conflicting_selection(message: impl Into<String>) -> Error {
    Error::ConflictingSelection {
        message: message.into(),
    }
}

pub(crate) fn unknown_category_value(dimension: Dimension, value: impl Into<String>) -> Error {
    Error::UnknownCategoryValue {
        dimension,
        value: value.into(),
    }
}
