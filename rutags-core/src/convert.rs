//! Mystem -> UD conversion entry points
//!
//! These are pure functions over the embedded tables. The word form is
//! accepted so every converter shares one signature; Mystem tags are
//! converted without it.

use crate::classifier::Classifier;
use crate::tag::ParsedTag;
use crate::tagset::SchemaVersion;

/// Parse a Mystem tag into the structured form of `version`
pub fn classify(raw_tag: &str, version: SchemaVersion) -> ParsedTag {
    Classifier::for_version(version).classify(raw_tag)
}

/// Convert a Mystem tag to the UD text form of `version`
pub fn convert(raw_tag: &str, version: SchemaVersion) -> String {
    classify(raw_tag, version).to_string()
}

/// Mystem -> UD 1.4
pub fn to_ud14(raw_tag: &str, _word: Option<&str>) -> String {
    convert(raw_tag, SchemaVersion::Ud14)
}

/// Mystem -> UD 2.0
pub fn to_ud20(raw_tag: &str, _word: Option<&str>) -> String {
    convert(raw_tag, SchemaVersion::Ud20)
}
