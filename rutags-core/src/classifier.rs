//! Grammeme tokenizer and tag classifier
//!
//! A raw analyzer tag such as `S,муж,неод=им,ед` is split into grammemes,
//! each grammeme is looked up in every category of a mapping table, and
//! grammemes that match nothing are offered to the table's postprocessing
//! rules before being dropped.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::tag::ParsedTag;
use crate::tagset::{get_table, MappingTable, SchemaVersion};

/// Inline capacity of the grammeme buffer; longer tags spill to the heap.
const INLINE_GRAMMEMES: usize = 12;

/// Grammeme buffer
pub type Grammemes<'a> = SmallVec<[&'a str; INLINE_GRAMMEMES]>;

static GRAMMEME: OnceLock<Regex> = OnceLock::new();

fn grammeme_regex() -> &'static Regex {
    GRAMMEME.get_or_init(|| Regex::new(r"\w+").expect("grammeme pattern is valid"))
}

/// Split a raw tag into grammemes.
///
/// Any run of non-word characters separates grammemes; empty grammemes
/// are never produced.
pub fn tokenize(raw_tag: &str) -> Grammemes<'_> {
    grammeme_regex()
        .find_iter(raw_tag)
        .map(|m| m.as_str())
        .collect()
}

/// Resolves raw tags against one mapping table
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    table: &'t MappingTable,
}

impl<'t> Classifier<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    /// Classifier over the embedded table of a schema version
    pub fn for_version(version: SchemaVersion) -> Classifier<'static> {
        Classifier::new(get_table(version))
    }

    /// Parse a raw tag. Never fails: unknown input yields `X _`.
    pub fn classify(&self, raw_tag: &str) -> ParsedTag {
        let mut tag = ParsedTag::new();

        for grammeme in tokenize(raw_tag) {
            self.resolve(&mut tag, grammeme);
        }
        self.postprocess(&mut tag);

        tag
    }

    /// Apply every category match of one grammeme
    fn resolve(&self, tag: &mut ParsedTag, grammeme: &str) {
        let mut matched = false;

        for (category, value) in self.table.matches(grammeme) {
            apply(tag, category, value);
            matched = true;
        }

        if !matched {
            tag.mark_unmatched(grammeme);
        }
    }

    /// Drain unmatched grammemes through the postprocessing rules
    fn postprocess(&self, tag: &mut ParsedTag) {
        while let Some(grammeme) = tag.take_unmatched() {
            let mut applied = false;

            for (category, value) in self.table.postprocess_rules(&grammeme) {
                apply(tag, category, value);
                applied = true;
            }

            if !applied {
                log::trace!(
                    "dropping unmapped {} grammeme {:?}",
                    self.table.source(),
                    grammeme
                );
            }
        }
    }
}

fn apply(tag: &mut ParsedTag, category: &str, value: &str) {
    if MappingTable::is_pos_category(category) {
        tag.set_pos(value);
    } else {
        tag.set_feature(category, value);
    }
}
