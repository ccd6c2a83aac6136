//! Core type definitions
//!
//! Includes query output formats and table categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tables::{APPLICATION_TABLES, DEFAULT_PLATFORM_TABLES, MULTISITE_TABLES};

// ============================================================================
// Output Formats
// ============================================================================

/// Shape of rows returned by the platform's query layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Rows as objects with column-named properties
    #[default]
    #[serde(rename = "OBJECT")]
    Object,
    /// Rows as objects keyed by the first column
    #[serde(rename = "OBJECT_K")]
    ObjectK,
    /// Rows as associative arrays
    #[serde(rename = "ARRAY_A")]
    ArrayA,
    /// Rows as numerically indexed arrays
    #[serde(rename = "ARRAY_N")]
    ArrayN,
}

impl OutputFormat {
    /// All recognized formats
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Object,
        OutputFormat::ObjectK,
        OutputFormat::ArrayA,
        OutputFormat::ArrayN,
    ];

    /// The platform constant name for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Object => "OBJECT",
            OutputFormat::ObjectK => "OBJECT_K",
            OutputFormat::ArrayA => "ARRAY_A",
            OutputFormat::ArrayN => "ARRAY_N",
        }
    }

    /// Look up a format by its exact constant name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Parse a constant name, falling back to the default format
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::trace!(value = name, "Unrecognized output format, using default");
            Self::default()
        })
    }

    /// Validate an arbitrary value as an output format.
    ///
    /// Only strings naming one of the four formats are accepted; anything
    /// else (numbers, null, unknown strings) yields the default.
    pub fn validate(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::parse_or_default(s),
            other => {
                tracing::trace!(value = %other, "Non-string output format, using default");
                Self::default()
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Table Categories
// ============================================================================

/// Which registry a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableCategory {
    /// The plugin's own tables
    Application,
    /// Built-in single-site platform tables
    DefaultPlatform,
    /// Built-in multi-site platform tables
    MultiSite,
}

impl TableCategory {
    /// All categories, in the order `classify` consults them
    pub const ALL: [TableCategory; 3] = [
        TableCategory::Application,
        TableCategory::DefaultPlatform,
        TableCategory::MultiSite,
    ];

    /// Registered table names for this category
    pub fn tables(&self) -> &'static [&'static str] {
        match self {
            TableCategory::Application => APPLICATION_TABLES,
            TableCategory::DefaultPlatform => DEFAULT_PLATFORM_TABLES,
            TableCategory::MultiSite => MULTISITE_TABLES,
        }
    }

    /// Whether `name` is registered in this category
    pub fn contains(&self, name: &str) -> bool {
        self.tables().contains(&name)
    }
}
