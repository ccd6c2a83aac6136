//! SQL Identifier Sanitization Utilities
//!
//! Key sanitization and identifier quoting are capabilities of the host
//! platform. They are modeled as traits so callers can plug in the
//! platform's own routines; the provided implementations follow the
//! platform's usual contracts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RegistryError, Result};

static COLUMN_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("column name pattern is valid"));

/// Turns an arbitrary key into the platform's safe key form
pub trait KeySanitizer {
    fn sanitize_key(&self, key: &str) -> String;
}

/// Wraps a raw name so it can be embedded in a query as an identifier
pub trait IdentifierQuoter {
    fn quote_identifier(&self, identifier: &str) -> String;
}

/// Lowercases and drops everything but ASCII letters, digits and underscores
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformKeySanitizer;

impl KeySanitizer for PlatformKeySanitizer {
    fn sanitize_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

/// MySQL-style quoting: `` `name` ``, embedded backticks doubled
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktickQuoter;

impl IdentifierQuoter for BacktickQuoter {
    fn quote_identifier(&self, identifier: &str) -> String {
        format!("`{}`", identifier.replace('`', "``"))
    }
}

/// ANSI quoting: `"name"`, embedded double quotes doubled
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiQuoter;

impl IdentifierQuoter for AnsiQuoter {
    fn quote_identifier(&self, identifier: &str) -> String {
        let escaped = identifier.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    }
}

/// Check a column name against `^[A-Za-z0-9_]+$`
///
/// # Example
/// ```
/// use cms_table_registry::sql::validate_column_name;
///
/// assert!(validate_column_name("user_id").is_ok());
/// assert!(validate_column_name("user-id; DROP TABLE x").is_err());
/// assert!(validate_column_name("").is_err());
/// ```
pub fn validate_column_name(column: &str) -> Result<()> {
    if COLUMN_NAME_PATTERN.is_match(column) {
        return Ok(());
    }

    tracing::debug!(column = column, "Rejected column name");
    Err(RegistryError::invalid_identifier(format!(
        "Column name '{}' is invalid. Only letters, numbers, and underscores are allowed.",
        column
    )))
}
