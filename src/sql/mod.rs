//! SQL identifier utilities
//!
//! Provides the key-sanitization and identifier-quoting seams plus the
//! column-name gate.

pub mod sanitize;

pub use sanitize::{
    AnsiQuoter, BacktickQuoter, IdentifierQuoter, KeySanitizer, PlatformKeySanitizer,
    validate_column_name,
};
