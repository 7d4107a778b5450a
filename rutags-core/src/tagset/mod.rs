//! Versioned tagset mapping tables
//!
//! Tagsets are authored as TOML and embedded in the binary. A tagset either
//! defines its categories outright or derives from a base tagset through a
//! list of overrides.

pub mod config;
pub mod loader;
pub mod table;
pub mod version;

pub use config::{CategoryMap, Metadata, TagsetConfig, POS_CATEGORY};
pub use loader::{get_table, list_versions};
pub use table::{Category, MappingTable};
pub use version::SchemaVersion;
