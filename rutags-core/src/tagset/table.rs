//! Runtime mapping table
//!
//! A `MappingTable` is the immutable, lookup-only form of a tagset
//! configuration. Categories are kept in a `BTreeMap`, so every sweep over
//! them runs in lexicographic order of category name.

use std::collections::BTreeMap;

use crate::error::{Result, TagsetError};
use crate::tagset::config::{CategoryMap, TagsetConfig, POS_CATEGORY};

/// Source token -> target token table of one category
pub type Category = BTreeMap<String, String>;

/// Mapping from source-format grammemes to target-schema values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    code: String,
    name: String,
    source: String,
    categories: CategoryMap,
    postprocess: CategoryMap,
}

impl MappingTable {
    /// Build a root table from configuration
    pub fn from_config(config: &TagsetConfig) -> Result<Self> {
        config.validate()?;

        if let Some(base) = &config.metadata.base {
            return Err(TagsetError::UnknownBase {
                code: config.metadata.code.clone(),
                base: base.clone(),
            });
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            source: config.metadata.source.clone(),
            categories: config.categories.clone(),
            postprocess: config.postprocess.clone(),
        })
    }

    /// Build a derived table from configuration and its already-built base
    pub fn derive_from_config(base: &MappingTable, config: &TagsetConfig) -> Result<Self> {
        config.validate()?;

        match config.metadata.base.as_deref() {
            Some(code) if code == base.code => {}
            Some(code) => {
                return Err(TagsetError::UnknownBase {
                    code: config.metadata.code.clone(),
                    base: code.to_string(),
                })
            }
            None => {
                return Err(TagsetError::Configuration(format!(
                    "tagset {} has no base to derive from",
                    config.metadata.code
                )))
            }
        }

        if base.source != config.metadata.source {
            return Err(TagsetError::Configuration(format!(
                "tagset {} reads {} tags but its base {} reads {}",
                config.metadata.code, config.metadata.source, base.code, base.source
            )));
        }

        let mut table = base.derive(
            config.metadata.code.clone(),
            config.metadata.name.clone(),
            &config.overrides,
        );
        merge(&mut table.postprocess, &config.postprocess);
        Ok(table)
    }

    /// Parse and build a root table from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = TagsetConfig::from_toml_str("custom", toml_str)?;
        Self::from_config(&config)
    }

    /// Deep copy of this table with `overrides` applied on top.
    ///
    /// The returned table shares nothing with `self`.
    pub fn derive(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
        overrides: &CategoryMap,
    ) -> Self {
        let mut table = self.clone();
        table.code = code.into();
        table.name = name.into();
        table.apply_overrides(overrides);
        table
    }

    /// Add or replace entries; categories missing from the table are created
    pub fn apply_overrides(&mut self, overrides: &CategoryMap) {
        merge(&mut self.categories, overrides);
    }

    /// Schema code, e.g. `ud14`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source tag format, e.g. `mystem`
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Sub-mapping of a category
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// All category names, sorted
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Target value of `token` in `category`
    pub fn lookup(&self, category: &str, token: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|entries| entries.get(token))
            .map(String::as_str)
    }

    /// Every `(category, value)` the token maps to, in category order.
    ///
    /// A grammeme may legitimately appear under several categories.
    pub fn matches<'a>(&'a self, token: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        find_all(&self.categories, token)
    }

    /// Postprocessing assignments for a grammeme that matched nothing
    pub fn postprocess_rules<'a>(
        &'a self,
        token: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        find_all(&self.postprocess, token)
    }

    /// Whether `category` is the reserved part-of-speech category
    #[inline]
    pub fn is_pos_category(category: &str) -> bool {
        category == POS_CATEGORY
    }
}

fn find_all<'a>(
    map: &'a CategoryMap,
    token: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    map.iter().filter_map(move |(category, entries)| {
        entries
            .get(token)
            .map(|value| (category.as_str(), value.as_str()))
    })
}

fn merge(target: &mut CategoryMap, extra: &CategoryMap) {
    for (category, entries) in extra {
        let slot = target.entry(category.clone()).or_default();
        for (token, value) in entries {
            slot.insert(token.clone(), value.clone());
        }
    }
}
