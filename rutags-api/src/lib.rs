//! Public API for Russian tagset conversion
//!
//! Converters are looked up by `(source format, target format)`. The
//! built-in pairs are `mystem -> ud14` and `mystem -> ud20`; hosting
//! applications can build their own [`ConverterRegistry`] and register
//! further converters at startup.
//!
//! ```rust
//! use rutags_api::convert;
//!
//! let tag = convert("S,муж,неод=им,ед", "mystem", "ud20", None).unwrap();
//! assert_eq!(tag, "NOUN Animacy=Inan|Case=Nom|Gender=Masc|Number=Sing");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod registry;

pub use error::{ApiError, Result};
pub use registry::{registry, ConverterFn, ConverterRegistry};

// Re-export the conversion core
pub use rutags_core::{classify, to_ud14, to_ud20, ParsedTag, SchemaVersion, MYSTEM};

/// Convert a tag with the process-wide registry
pub fn convert(tag: &str, from: &str, to: &str, word: Option<&str>) -> Result<String> {
    registry().convert(tag, from, to, word)
}

/// Pairs the process-wide registry converts directly
pub fn supported() -> Vec<(&'static str, &'static str)> {
    registry().supported()
}
