//! Error types for strict argument retrieval.
//!
//! The lenient accessors never produce these; they exist for callers that
//! want to validate a value themselves instead of taking the fallback.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors returned by the strict accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Argument '{flag}' was not given")]
    Missing { flag: String },

    #[error("Argument '{flag}' has non-integer value '{value}': {source}")]
    InvalidInteger {
        flag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
