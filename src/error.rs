//! Error types
//!
//! `DataError` covers seed data that cannot be turned into a registry or a
//! prize list. `RequestError` covers the checks a verification request must
//! pass before the registry is queried.

use thiserror::Error;

/// Malformed registry or prize data
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("holder #{position} has an empty name")]
    EmptyHolderName { position: usize },

    #[error("holder {name:?} is registered twice")]
    RepeatedHolder { name: String },

    #[error("holder {holder:?} has malformed ticket number {number:?}")]
    MalformedTicket { holder: String, number: String },

    #[error("prize #{position} has malformed ticket number {number:?}")]
    MalformedPrize { position: usize, number: String },

    #[error("prize amounts overflow at prize #{position}")]
    AmountOverflow { position: usize },
}

/// Reasons a verification request is turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("a holder name is required")]
    EmptyName,

    #[error("ticket number must be exactly 5 digits, got {number:?}")]
    InvalidFormat { number: String },

    #[error(
        "number {number} is registered to several holders ({}), contact customer support to confirm ownership",
        holders.join(", ")
    )]
    DuplicateNumberDetected { number: String, holders: Vec<String> },
}

impl RequestError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::EmptyName => "empty_name",
            RequestError::InvalidFormat { .. } => "invalid_format",
            RequestError::DuplicateNumberDetected { .. } => "duplicate_number",
        }
    }
}
