//! `[check]` section configuration.
//!
//! ```toml
//! [check]
//! level = "error"   # error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// How dead links affect the exit status of `check`.
    pub level: CheckLevel,
}

/// Failure level for dead-link checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Dead links fail the command
    #[default]
    Error,
    /// Dead links are reported only
    Warn,
}

impl CheckLevel {
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}
