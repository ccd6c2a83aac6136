//! Table name classification and identifier assembly
//!
//! [`TableNameClassifier`] combines the compiled-in registries with the
//! platform's prefix configuration and its sanitization capabilities.

use crate::config::PrefixConfig;
use crate::error::Result;
use crate::sql::sanitize::{
    BacktickQuoter, IdentifierQuoter, KeySanitizer, PlatformKeySanitizer, validate_column_name,
};
use crate::tables;
use crate::types::{OutputFormat, TableCategory};

/// Classifies table names and prepares identifiers for interpolation
///
/// Holds no mutable state; share it freely across threads when the
/// collaborators allow it.
#[derive(Debug, Clone)]
pub struct TableNameClassifier<S = PlatformKeySanitizer, Q = BacktickQuoter> {
    config: PrefixConfig,
    sanitizer: S,
    quoter: Q,
}

impl TableNameClassifier {
    /// Create a classifier using the default sanitizer and backtick quoting
    pub fn new(config: PrefixConfig) -> Self {
        Self::with_collaborators(config, PlatformKeySanitizer, BacktickQuoter)
    }
}

impl Default for TableNameClassifier {
    fn default() -> Self {
        Self::new(PrefixConfig::default())
    }
}

impl<S, Q> TableNameClassifier<S, Q>
where
    S: KeySanitizer,
    Q: IdentifierQuoter,
{
    /// Create a classifier with the platform's own sanitizer and quoter
    pub fn with_collaborators(config: PrefixConfig, sanitizer: S, quoter: Q) -> Self {
        Self {
            config,
            sanitizer,
            quoter,
        }
    }

    /// Prefix configuration this classifier was built with
    pub fn config(&self) -> &PrefixConfig {
        &self.config
    }

    /// Whether `name` is one of the plugin's own tables
    pub fn is_application_table(&self, name: &str) -> bool {
        tables::is_application_table(name)
    }

    /// Whether `name` is a built-in single-site platform table
    pub fn is_default_platform_table(&self, name: &str) -> bool {
        tables::is_default_platform_table(name)
    }

    /// Whether `name` is a built-in multi-site platform table
    pub fn is_multisite_table(&self, name: &str) -> bool {
        tables::is_multisite_table(name)
    }

    /// Whether `name` is any built-in platform table
    pub fn is_platform_table(&self, name: &str) -> bool {
        tables::is_platform_table(name)
    }

    /// Whether `name` is registered in any registry
    pub fn is_known_table(&self, name: &str) -> bool {
        tables::is_known_table(name)
    }

    /// Registry category of `name`, see [`tables::classify`]
    pub fn classify(&self, name: &str) -> Option<TableCategory> {
        tables::classify(name)
    }

    /// Returns `value` as a format if recognized, otherwise the default
    pub fn valid_output_format(&self, value: &serde_json::Value) -> OutputFormat {
        OutputFormat::validate(value)
    }

    /// Build a quoted, prefixed table identifier.
    ///
    /// The prefix is `prefix` when given (even if empty), otherwise the
    /// configured primary prefix. The prefix is used as-is; only `table`
    /// goes through key sanitization. Injection safety rests on the quoter.
    ///
    /// # Example
    /// ```
    /// use cms_table_registry::{PrefixConfig, TableNameClassifier};
    ///
    /// let classifier = TableNameClassifier::new(PrefixConfig::default());
    /// assert_eq!(classifier.prefixed_table_name("Events", None), "`wp_events`");
    /// assert_eq!(classifier.prefixed_table_name("events", Some("custom_")), "`custom_events`");
    /// ```
    pub fn prefixed_table_name(&self, table: &str, prefix: Option<&str>) -> String {
        let prefix = prefix.unwrap_or(self.config.table_prefix.as_str());
        let name = format!("{}{}", prefix, self.sanitizer.sanitize_key(table));
        self.quoter.quote_identifier(&name)
    }

    /// Validate a column name, then return its key-sanitized form
    pub fn sanitize_column_name(&self, column: &str) -> Result<String> {
        validate_column_name(column)?;
        Ok(self.sanitizer.sanitize_key(column))
    }

    /// Whether `table_name` starts with the primary or the custom prefix
    pub fn has_recognized_prefix(&self, table_name: &str) -> bool {
        table_name.starts_with(self.config.table_prefix.as_str())
            || self
                .config
                .custom_prefix()
                .is_some_and(|custom| table_name.starts_with(custom))
    }

    /// Strip the longest recognized prefix from `table_name`.
    ///
    /// Returns `None` when no configured prefix matches.
    pub fn strip_recognized_prefix<'a>(&self, table_name: &'a str) -> Option<&'a str> {
        [Some(self.config.table_prefix.as_str()), self.config.custom_prefix()]
            .into_iter()
            .flatten()
            .filter(|prefix| table_name.starts_with(*prefix))
            .max_by_key(|prefix| prefix.len())
            .map(|prefix| &table_name[prefix.len()..])
    }
}
