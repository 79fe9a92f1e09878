//! # Site configuration
//!
//! A small TOML document stored alongside the record slots:
//!
//! ```toml
//! [sync]
//! refresh_interval_secs = 30   # 0 to disable auto-refresh
//! ```
//!
//! The public page reads this to decide how often to poll the repository
//! for changes. All structs derive `Default` so a missing or empty slot is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in the config slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub sync: SyncConfig,
}

/// Refresh behavior of the public page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Poll interval in seconds. 0 disables auto-refresh.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u32,
}

fn default_refresh_interval() -> u32 {
    30
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl SiteConfig {
    /// Builder method to set the refresh interval.
    pub fn with_refresh_interval(mut self, secs: u32) -> Self {
        self.sync.refresh_interval_secs = secs;
        self
    }

    /// Parse from TOML text.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
