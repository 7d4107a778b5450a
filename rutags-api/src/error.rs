//! API error types

use thiserror::Error;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Neither side of a conversion pair is known to the registry
    #[error("unknown tag format: {0}")]
    UnknownFormat(String),

    /// Both formats are known but no chain of converters links them
    #[error("no conversion path from {from} to {to}")]
    NoConversionPath {
        /// Source format
        from: String,
        /// Target format
        to: String,
    },

    /// The pair already has a converter; registrations are never replaced
    #[error("converter from {from} to {to} is already registered")]
    DuplicateConverter {
        /// Source format
        from: String,
        /// Target format
        to: String,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
