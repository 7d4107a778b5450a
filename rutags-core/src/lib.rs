//! Mystem to Universal Dependencies tag conversion
//!
//! Morphological tags emitted by the Mystem analyzer (`S,муж,неод=им,ед`)
//! are remapped to the Universal Dependencies scheme (`NOUN
//! Animacy=Inan|Case=Nom|Gender=Masc|Number=Sing`) for UD 1.4 and UD 2.0.
//!
//! # Architecture
//!
//! - **Tagsets**: versioned grammeme mapping tables, embedded as TOML and
//!   loaded once. UD 2.0 is derived from UD 1.4 through overrides.
//! - **Classifier**: tokenizes a raw tag and resolves every grammeme
//!   against every category of a table.
//! - **Tag**: the structured result and its canonical text form.
//!
//! Conversion is total: unknown grammemes are dropped and a tag with no
//! recognisable part of speech becomes `X`.
//!
//! # Example
//!
//! ```rust
//! use rutags_core::{to_ud14, to_ud20};
//!
//! assert_eq!(to_ud14("V,несов,пе=прош", None), "VERB Aspect=Imp|Subcat=Tran|Tense=Past");
//! assert_eq!(to_ud20("CONJ=", None), "CCONJ _");
//! ```

pub mod classifier;
pub mod convert;
pub mod error;
pub mod tag;
pub mod tagset;

pub use classifier::{tokenize, Classifier};
pub use convert::{classify, convert, to_ud14, to_ud20};
pub use error::{Result, TagsetError};
pub use tag::{ParsedTag, NO_FEATURES, UNKNOWN_POS};
pub use tagset::{get_table, list_versions, MappingTable, SchemaVersion, POS_CATEGORY};

/// Source tag format handled by this crate
pub const MYSTEM: &str = "mystem";
