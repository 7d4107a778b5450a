//! Configuration structures and validation
//!
//! This module defines the TOML schema for tagset configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagsetError};

/// Reserved category holding the part-of-speech mapping.
pub const POS_CATEGORY: &str = "_POS";

/// Source token -> target token, per category
pub type CategoryMap = BTreeMap<String, BTreeMap<String, String>>;

/// Root tagset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsetConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub categories: CategoryMap,
    #[serde(default)]
    pub overrides: CategoryMap,
    #[serde(default)]
    pub postprocess: CategoryMap,
}

/// Tagset metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    pub source: String,
    /// Code of the tagset this one is derived from
    #[serde(default)]
    pub base: Option<String>,
}

impl TagsetConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(code: &str, toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|source| TagsetError::Parse {
            code: code.to_string(),
            source,
        })
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.metadata.base {
            Some(base) => {
                if base == &self.metadata.code {
                    return Err(TagsetError::Configuration(format!(
                        "tagset {} derives from itself",
                        self.metadata.code
                    )));
                }
                if !self.categories.is_empty() {
                    return Err(TagsetError::Configuration(format!(
                        "derived tagset {} must use [overrides], not [categories]",
                        self.metadata.code
                    )));
                }
            }
            None => {
                if self
                    .categories
                    .get(POS_CATEGORY)
                    .map_or(true, |pos| pos.is_empty())
                {
                    return Err(TagsetError::Configuration(format!(
                        "tagset {} defines no {POS_CATEGORY} mapping",
                        self.metadata.code
                    )));
                }
                if !self.overrides.is_empty() {
                    return Err(TagsetError::Configuration(format!(
                        "tagset {} has [overrides] but no base",
                        self.metadata.code
                    )));
                }
            }
        }

        for (section, map) in [
            ("categories", &self.categories),
            ("overrides", &self.overrides),
            ("postprocess", &self.postprocess),
        ] {
            for (category, entries) in map {
                if category.is_empty() {
                    return Err(TagsetError::Configuration(format!(
                        "empty category name in [{section}]"
                    )));
                }
                if let Some((token, _)) = entries
                    .iter()
                    .find(|(token, value)| token.is_empty() || value.is_empty())
                {
                    return Err(TagsetError::Configuration(format!(
                        "empty entry {token:?} in [{section}.{category}]"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        code = "mini"
        name = "Minimal"
        source = "mystem"

        [categories._POS]
        S = "NOUN"
    "#;

    #[test]
    fn test_parse_minimal() {
        let config = TagsetConfig::from_toml_str("mini", MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "mini");
        assert_eq!(config.metadata.base, None);
        assert_eq!(config.categories[POS_CATEGORY]["S"], "NOUN");
        assert!(config.overrides.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error_names_tagset() {
        let err = TagsetConfig::from_toml_str("broken", "[metadata").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_root_requires_pos() {
        let config = TagsetConfig::from_toml_str(
            "nopos",
            r#"
            [metadata]
            code = "nopos"
            name = "No POS"
            source = "mystem"

            [categories.Case]
            "им" = "Nom"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(TagsetError::Configuration(_))
        ));
    }

    #[test]
    fn test_derived_rejects_categories() {
        let config = TagsetConfig::from_toml_str(
            "derived",
            r#"
            [metadata]
            code = "derived"
            name = "Derived"
            source = "mystem"
            base = "mini"

            [categories._POS]
            S = "NOUN"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_root_rejects_overrides() {
        let mut config = TagsetConfig::from_toml_str("mini", MINIMAL).unwrap();
        config
            .overrides
            .entry("Abbr".to_string())
            .or_default()
            .insert("сокр".to_string(), "Yes".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_value_rejected() {
        let mut config = TagsetConfig::from_toml_str("mini", MINIMAL).unwrap();
        config
            .postprocess
            .entry(POS_CATEGORY.to_string())
            .or_default()
            .insert("гео".to_string(), String::new());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("postprocess"));
    }
}
