//! Error types for tagset loading

use thiserror::Error;

/// Errors raised while building mapping tables.
///
/// Converting a tag never fails; these only surface when a tagset
/// configuration is parsed or a schema version is looked up by name.
#[derive(Debug, Error)]
pub enum TagsetError {
    /// TOML could not be parsed into a tagset configuration
    #[error("failed to parse {code} tagset: {source}")]
    Parse {
        code: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration parsed but is not usable
    #[error("invalid tagset configuration: {0}")]
    Configuration(String),

    /// A derived tagset names a base that was not loaded before it
    #[error("tagset {code} derives from unknown base {base}")]
    UnknownBase { code: String, base: String },

    /// Schema version code not recognised
    #[error("unknown schema version: {0}")]
    UnknownVersion(String),
}

/// Result type for tagset operations
pub type Result<T> = std::result::Result<T, TagsetError>;
