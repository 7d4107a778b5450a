//! Embedded tagset loader
//!
//! Tables are parsed once, on first access, and stay immutable for the
//! life of the process.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{Result, TagsetError};
use crate::tagset::config::TagsetConfig;
use crate::tagset::table::MappingTable;
use crate::tagset::version::SchemaVersion;

static TABLES: OnceLock<BTreeMap<SchemaVersion, MappingTable>> = OnceLock::new();

macro_rules! embed_tagset_config {
    ($version:expr, $path:expr) => {
        ($version, include_str!($path))
    };
}

/// Base tagsets must precede the tagsets derived from them.
fn load_embedded_tables() -> Result<BTreeMap<SchemaVersion, MappingTable>> {
    let embedded = [
        embed_tagset_config!(
            SchemaVersion::Ud14,
            "../../configs/tagsets/mystem_ud14.toml"
        ),
        embed_tagset_config!(
            SchemaVersion::Ud20,
            "../../configs/tagsets/mystem_ud20.toml"
        ),
    ];

    let mut tables: BTreeMap<SchemaVersion, MappingTable> = BTreeMap::new();

    for (version, toml_content) in embedded {
        let code = version.code();
        let config = TagsetConfig::from_toml_str(code, toml_content)?;

        if config.metadata.code != code {
            return Err(TagsetError::Configuration(format!(
                "tagset code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        let table = match &config.metadata.base {
            Some(base_code) => {
                let base = tables
                    .values()
                    .find(|table| table.code() == base_code.as_str())
                    .ok_or_else(|| TagsetError::UnknownBase {
                        code: code.to_string(),
                        base: base_code.clone(),
                    })?;
                MappingTable::derive_from_config(base, &config)?
            }
            None => MappingTable::from_config(&config)?,
        };

        log::debug!(
            "loaded tagset {} ({} -> {}, {} categories)",
            code,
            table.source(),
            table.name(),
            table.category_names().count()
        );
        tables.insert(version, table);
    }

    Ok(tables)
}

fn tables() -> &'static BTreeMap<SchemaVersion, MappingTable> {
    TABLES.get_or_init(|| load_embedded_tables().expect("Failed to load embedded tagset configs"))
}

/// Mapping table for a schema version
pub fn get_table(version: SchemaVersion) -> &'static MappingTable {
    // Every SchemaVersion has an embedded config; load_embedded_tables fails otherwise.
    &tables()[&version]
}

/// Schema versions with a loaded table
pub fn list_versions() -> Vec<SchemaVersion> {
    tables().keys().copied().collect()
}
