//! Property-based tests for language tags and inline merging

use ltex_core::document::merge_entries;
use ltex_core::{SettingsExpander, sanitize_language_tag};
use ltex_fs::WordFileCache;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

proptest! {
    #[test]
    fn sanitized_tag_is_a_safe_component(tag in ".{0,40}") {
        let sanitized = sanitize_language_tag(&tag);
        prop_assert!(!sanitized.is_empty());
        prop_assert!(sanitized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
    }

    #[test]
    fn sanitizing_twice_changes_nothing(tag in ".{0,40}") {
        let once = sanitize_language_tag(&tag);
        prop_assert_eq!(sanitize_language_tag(&once), once);
    }

    #[test]
    fn merge_keeps_existing_prefix_and_all_entries(
        existing in prop::collection::vec("[a-z]{1,6}", 0..8),
        incoming in prop::collection::vec("[a-z]{1,6}", 0..8),
    ) {
        let merged = merge_entries(&existing, &incoming);
        prop_assert_eq!(&merged[..existing.len()], &existing[..]);
        for entry in existing.iter().chain(&incoming) {
            prop_assert!(merged.contains(entry));
        }
    }

    #[test]
    fn expansion_without_markers_is_identity(
        words in prop::collection::vec("[a-z]{1,6}", 0..6),
        other in "[a-z]{0,10}",
    ) {
        let document: Map<String, Value> = json!({
            "ltex.dictionary": {"en-US": words},
            "ltex.language": other,
        })
        .as_object()
        .cloned()
        .unwrap();

        let cache = WordFileCache::new();
        prop_assert_eq!(SettingsExpander::new(&cache).expand(&document), document);
    }
}
