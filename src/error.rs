//! Error types for identifier parsing and table loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the resolver and the region table loader.
///
/// A region code that is simply absent from the table is not an error;
/// lookups degrade to an empty result instead.
#[derive(Error, Debug)]
pub enum IdCardError {
    /// The region data file could not be read at startup.
    #[error("failed to load region data from {}: {source}", path.display())]
    RegionData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The identifier is too short to contain the requested field.
    #[error("identifier too short for {field}: need {needed} characters, got {got}")]
    TooShort {
        field: &'static str,
        needed: usize,
        got: usize,
    },

    /// The birth date field is not a valid YYYYMMDD calendar date.
    #[error("invalid birth date field {field:?}: {source}")]
    BirthDate {
        field: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The gender position holds something other than a decimal digit.
    #[error("invalid gender digit {found:?}")]
    GenderDigit { found: char },
}
