//! Integration tests for cms-table-registry
//!
//! Exercises the public API the way a data-access layer would, with both
//! the provided collaborators and fakes standing in for the host platform.

use cms_table_registry::{
    APPLICATION_TABLES, DEFAULT_PLATFORM_TABLES, IdentifierQuoter, KeySanitizer,
    MULTISITE_TABLES, OutputFormat, PrefixConfig, RegistryError, TableCategory,
    TableNameClassifier,
};
use serde_json::json;

/// Host-platform stand-in that only lowercases
struct LowercaseSanitizer;

impl KeySanitizer for LowercaseSanitizer {
    fn sanitize_key(&self, key: &str) -> String {
        key.to_lowercase()
    }
}

/// Host-platform stand-in that leaves identifiers unquoted
struct NoQuote;

impl IdentifierQuoter for NoQuote {
    fn quote_identifier(&self, identifier: &str) -> String {
        identifier.to_string()
    }
}

fn platform_classifier() -> TableNameClassifier<LowercaseSanitizer, NoQuote> {
    TableNameClassifier::with_collaborators(
        PrefixConfig::builder("wp_").custom_prefix("music_").build(),
        LowercaseSanitizer,
        NoQuote,
    )
}

// ==================== Classification Tests ====================

#[test]
fn test_every_registered_table_is_known() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());

    for name in APPLICATION_TABLES {
        assert!(classifier.is_application_table(name));
        assert!(classifier.is_known_table(name));
    }
    for name in DEFAULT_PLATFORM_TABLES.iter().chain(MULTISITE_TABLES) {
        assert!(classifier.is_platform_table(name));
        assert!(classifier.is_known_table(name));
    }
}

#[test]
fn test_unregistered_tables_are_unknown() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());

    for name in ["unrelated_table", "wp_posts", "ARTISTS", "artist", ""] {
        assert!(!classifier.is_known_table(name), "{name:?}");
        assert_eq!(classifier.classify(name), None);
    }
}

#[test]
fn test_platform_table_is_union_of_both_sets() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());
    let unregistered = ["nope", "wp_users"];
    let names = APPLICATION_TABLES
        .iter()
        .chain(DEFAULT_PLATFORM_TABLES)
        .chain(MULTISITE_TABLES)
        .chain(unregistered.iter());

    for name in names {
        assert_eq!(
            classifier.is_platform_table(name),
            classifier.is_default_platform_table(name) || classifier.is_multisite_table(name),
            "{name}"
        );
        assert_eq!(
            classifier.is_known_table(name),
            classifier.is_application_table(name) || classifier.is_platform_table(name),
            "{name}"
        );
    }
}

#[test]
fn test_classify_prefixed_names() {
    let classifier = platform_classifier();

    let classify = |name: &str| {
        classifier
            .strip_recognized_prefix(name)
            .and_then(|bare| classifier.classify(bare))
    };

    assert_eq!(classify("wp_posts"), Some(TableCategory::DefaultPlatform));
    assert_eq!(classify("wp_blogs"), Some(TableCategory::MultiSite));
    assert_eq!(classify("music_artists"), Some(TableCategory::Application));
    assert_eq!(classify("other_posts"), None);
}

// ==================== Output Format Tests ====================

#[test]
fn test_output_format_validation() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());

    for (value, expected) in [
        (json!("OBJECT"), OutputFormat::Object),
        (json!("OBJECT_K"), OutputFormat::ObjectK),
        (json!("ARRAY_A"), OutputFormat::ArrayA),
        (json!("ARRAY_N"), OutputFormat::ArrayN),
        (json!("bogus"), OutputFormat::Object),
        (json!(42), OutputFormat::Object),
        (json!({"format": "ARRAY_A"}), OutputFormat::Object),
    ] {
        assert_eq!(classifier.valid_output_format(&value), expected, "{value}");
    }
}

// ==================== Identifier Tests ====================

#[test]
fn test_prefixed_table_name_round_trip() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());

    let quoted = classifier.prefixed_table_name("events", Some("custom_"));
    let unquoted = quoted.trim_matches('`');

    assert!(unquoted.starts_with("custom_"));
    assert_eq!(&unquoted["custom_".len()..], "events");
}

#[test]
fn test_prefixed_table_name_with_fake_collaborators() {
    let classifier = platform_classifier();

    assert_eq!(classifier.prefixed_table_name("Artists", None), "wp_artists");
    assert_eq!(
        classifier.prefixed_table_name("Artists", Some("music_")),
        "music_artists"
    );
}

#[test]
fn test_sanitize_column_name() {
    let classifier = platform_classifier();

    assert_eq!(classifier.sanitize_column_name("user_id").unwrap(), "user_id");
    assert_eq!(classifier.sanitize_column_name("UserId").unwrap(), "userid");

    for bad in ["", "user-id; DROP TABLE x", "a b", "col`"] {
        let err = classifier.sanitize_column_name(bad).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidIdentifier(_)), "{bad:?}");
    }
}

// ==================== Prefix Tests ====================

#[test]
fn test_recognized_prefixes() {
    let classifier = platform_classifier();

    assert!(classifier.has_recognized_prefix("wp_anything"));
    assert!(classifier.has_recognized_prefix("music_anything"));
    assert!(!classifier.has_recognized_prefix("unrelated_table"));
}

#[test]
fn test_recognized_prefix_without_custom() {
    let classifier = TableNameClassifier::new(PrefixConfig::default());

    assert!(classifier.has_recognized_prefix("wp_options"));
    assert!(!classifier.has_recognized_prefix("music_artists"));
}

#[test]
fn test_classifier_shared_across_threads() {
    let classifier = std::sync::Arc::new(TableNameClassifier::new(PrefixConfig::default()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || {
                classifier.is_known_table("posts")
                    && classifier.prefixed_table_name("posts", None) == "`wp_posts`"
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
