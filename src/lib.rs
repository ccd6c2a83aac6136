//! # cms-table-registry
//!
//! Table-name classification and identifier sanitization for a CMS plugin's
//! data-access layer.
//!
//! The crate knows three compiled-in registries of table names (the
//! plugin's own tables, the platform's single-site tables, and the
//! platform's multi-site tables) and prepares table and column identifiers
//! before they are interpolated into SQL strings. It never executes queries.
//!
//! ## Features
//!
//! - **Table Classification**: Exact, case-sensitive registry lookups
//! - **Output Format Validation**: Unknown formats fall back to `OBJECT`
//! - **Prefixed Table Names**: Prefix resolution, key sanitization, and quoting
//! - **Column Gate**: Column names must match `^[A-Za-z0-9_]+$`
//! - **Pluggable Collaborators**: Key sanitization and identifier quoting are traits
//!
//! ## Quick Start
//!
//! ```rust
//! use cms_table_registry::{OutputFormat, PrefixConfig, TableNameClassifier};
//!
//! let config = PrefixConfig::builder("wp_").custom_prefix("music_").build();
//! let classifier = TableNameClassifier::new(config);
//!
//! assert!(classifier.is_application_table("artists"));
//! assert!(classifier.is_platform_table("posts"));
//! assert!(classifier.has_recognized_prefix("music_releases"));
//!
//! assert_eq!(classifier.prefixed_table_name("artists", None), "`wp_artists`");
//! assert_eq!(classifier.sanitize_column_name("Release_ID").unwrap(), "release_id");
//! assert!(classifier.sanitize_column_name("id; DROP TABLE x").is_err());
//!
//! let format = classifier.valid_output_format(&serde_json::json!("ARRAY_A"));
//! assert_eq!(format, OutputFormat::ArrayA);
//! ```
//!
//! ## Configuration
//!
//! Prefixes come from [`PrefixConfig`], built explicitly or read from the
//! `TABLE_PREFIX` and `CUSTOM_TABLE_PREFIX` environment variables:
//!
//! ```rust
//! use cms_table_registry::PrefixConfig;
//!
//! let config = PrefixConfig::builder("wp_")  // Primary prefix (default: "wp_")
//!     .custom_prefix("music_")               // Optional secondary prefix
//!     .build();
//! # let _ = config;
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod sql;
pub mod tables;
pub mod types;

// Re-export main types for convenience
pub use classifier::TableNameClassifier;
pub use config::{PrefixConfig, PrefixConfigBuilder};
pub use error::{RegistryError, Result};
pub use types::{OutputFormat, TableCategory};

pub use sql::sanitize::{
    AnsiQuoter, BacktickQuoter, IdentifierQuoter, KeySanitizer, PlatformKeySanitizer,
    validate_column_name,
};
pub use tables::{APPLICATION_TABLES, DEFAULT_PLATFORM_TABLES, MULTISITE_TABLES};
