//! Universal Dependencies schema versions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagsetError;

/// Target UD schema release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Universal Dependencies 1.4
    Ud14,
    /// Universal Dependencies 2.0
    Ud20,
}

impl SchemaVersion {
    /// All supported versions, oldest first
    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::Ud14, SchemaVersion::Ud20];

    /// Format name used in tagset configs and converter keys
    pub fn code(self) -> &'static str {
        match self {
            SchemaVersion::Ud14 => "ud14",
            SchemaVersion::Ud20 => "ud20",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SchemaVersion {
    type Err = TagsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaVersion::ALL
            .into_iter()
            .find(|version| version.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| TagsetError::UnknownVersion(s.to_string()))
    }
}
