//! Compiled-in table registries
//!
//! Names are stored without any prefix. Matching is exact and
//! case-sensitive; callers strip the prefix first if needed.

use crate::types::TableCategory;

/// Tables belonging to the plugin's own schema
pub const APPLICATION_TABLES: &[&str] = &[
    "entities",
    "entity_meta",
    "artists",
    "releases",
    "release_artists",
    "release_tracks",
    "tracks",
    "labels",
    "genres",
    "events",
    "venues",
    "playlists",
    "playlist_items",
    "media",
    "settings",
    "audit_log",
    "api_tokens",
    "encryption_keys",
];

/// Built-in single-site platform tables
pub const DEFAULT_PLATFORM_TABLES: &[&str] = &[
    "commentmeta",
    "comments",
    "links",
    "options",
    "postmeta",
    "posts",
    "termmeta",
    "terms",
    "term_relationships",
    "term_taxonomy",
    "usermeta",
    "users",
];

/// Built-in multi-site platform tables
pub const MULTISITE_TABLES: &[&str] = &[
    "blogmeta",
    "blogs",
    "blog_versions",
    "registration_log",
    "signups",
    "site",
    "sitemeta",
];

pub fn is_application_table(name: &str) -> bool {
    APPLICATION_TABLES.contains(&name)
}

pub fn is_default_platform_table(name: &str) -> bool {
    DEFAULT_PLATFORM_TABLES.contains(&name)
}

pub fn is_multisite_table(name: &str) -> bool {
    MULTISITE_TABLES.contains(&name)
}

/// Either a single-site or a multi-site platform table
pub fn is_platform_table(name: &str) -> bool {
    is_default_platform_table(name) || is_multisite_table(name)
}

/// Registered in any of the three registries
pub fn is_known_table(name: &str) -> bool {
    is_application_table(name) || is_platform_table(name)
}

/// Categorize a table name.
///
/// The first category in [`TableCategory::ALL`] that lists the name wins, so
/// application tables take precedence over single-site platform tables, and
/// those over multi-site ones.
pub fn classify(name: &str) -> Option<TableCategory> {
    TableCategory::ALL
        .into_iter()
        .find(|category| category.contains(name))
}
