//! Parsed tag and its UD text form

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Part of speech when nothing in the tag identifies one
pub const UNKNOWN_POS: &str = "X";

/// Placeholder written when a tag has no features
pub const NO_FEATURES: &str = "_";

/// Part of speech plus named grammatical features.
///
/// Features are keyed by category and kept sorted, so the rendered form
/// does not depend on the order they were set in:
///
/// ```rust
/// use rutags_core::ParsedTag;
///
/// let mut tag = ParsedTag::new();
/// tag.set_pos("NOUN");
/// tag.set_feature("Number", "Sing");
/// tag.set_feature("Case", "Nom");
/// assert_eq!(tag.to_string(), "NOUN Case=Nom|Number=Sing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTag {
    pos: String,
    features: BTreeMap<String, String>,
    #[serde(skip)]
    unmatched: BTreeSet<String>,
}

impl ParsedTag {
    /// Empty tag: unknown part of speech, no features
    pub fn new() -> Self {
        Self {
            pos: UNKNOWN_POS.to_string(),
            features: BTreeMap::new(),
            unmatched: BTreeSet::new(),
        }
    }

    /// UD part-of-speech tag
    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn set_pos(&mut self, pos: impl Into<String>) {
        self.pos = pos.into();
    }

    /// Value of a feature category, if set
    pub fn feature(&self, category: &str) -> Option<&str> {
        self.features.get(category).map(String::as_str)
    }

    /// Set a feature, returning the value it replaced
    pub fn set_feature(
        &mut self,
        category: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.features.insert(category.into(), value.into())
    }

    /// Features sorted by category name
    pub fn features(&self) -> impl Iterator<Item = (&str, &str)> {
        self.features
            .iter()
            .map(|(category, value)| (category.as_str(), value.as_str()))
    }

    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }

    /// Grammemes that matched no category and are still pending
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.unmatched.iter().map(String::as_str)
    }

    pub(crate) fn mark_unmatched(&mut self, token: &str) {
        if !self.unmatched.contains(token) {
            self.unmatched.insert(token.to_string());
        }
    }

    pub(crate) fn take_unmatched(&mut self) -> Option<String> {
        self.unmatched.pop_first()
    }
}

impl Default for ParsedTag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParsedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.pos)?;

        if self.features.is_empty() {
            return f.write_str(NO_FEATURES);
        }

        for (i, (category, value)) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{category}={value}")?;
        }
        Ok(())
    }
}
