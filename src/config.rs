//! Configuration for the table classifier
//!
//! Holds the host platform's table-name prefixes. Build it explicitly with
//! [`PrefixConfig::builder`], or load it from the environment with
//! [`PrefixConfig::from_env`].

use serde::{Deserialize, Serialize};

/// Primary prefix used when nothing else is configured
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

/// Environment variable holding the primary table prefix
pub const TABLE_PREFIX_ENV: &str = "TABLE_PREFIX";

/// Environment variable holding the optional secondary prefix
pub const CUSTOM_TABLE_PREFIX_ENV: &str = "CUSTOM_TABLE_PREFIX";

/// Table-name prefixes of the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixConfig {
    /// Primary prefix applied to every platform and application table (default: "wp_")
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
    /// Secondary prefix for tables created under a custom naming scheme
    #[serde(default)]
    pub custom_prefix: Option<String>,
}

fn default_table_prefix() -> String {
    DEFAULT_TABLE_PREFIX.to_string()
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            table_prefix: default_table_prefix(),
            custom_prefix: None,
        }
    }
}

impl PrefixConfig {
    /// Create a new configuration builder
    pub fn builder(table_prefix: impl Into<String>) -> PrefixConfigBuilder {
        PrefixConfigBuilder::new(table_prefix)
    }

    /// Load prefixes from `TABLE_PREFIX` and `CUSTOM_TABLE_PREFIX`.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_prefix = lookup(TABLE_PREFIX_ENV)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(default_table_prefix);
        let custom_prefix = lookup(CUSTOM_TABLE_PREFIX_ENV).filter(|p| !p.trim().is_empty());

        tracing::debug!(
            table_prefix = %table_prefix,
            custom_prefix = ?custom_prefix,
            "Loaded table prefix configuration"
        );

        Self {
            table_prefix,
            custom_prefix,
        }
    }

    /// Secondary prefix, if one is configured and non-empty
    pub fn custom_prefix(&self) -> Option<&str> {
        self.custom_prefix.as_deref().filter(|p| !p.is_empty())
    }
}

/// Builder for PrefixConfig
#[derive(Debug)]
pub struct PrefixConfigBuilder {
    table_prefix: String,
    custom_prefix: Option<String>,
}

impl PrefixConfigBuilder {
    /// Create a new builder with the primary table prefix
    pub fn new(table_prefix: impl Into<String>) -> Self {
        Self {
            table_prefix: table_prefix.into(),
            custom_prefix: None,
        }
    }

    /// Set the secondary custom prefix
    pub fn custom_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_prefix = Some(prefix.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> PrefixConfig {
        PrefixConfig {
            table_prefix: self.table_prefix,
            custom_prefix: self.custom_prefix,
        }
    }
}
