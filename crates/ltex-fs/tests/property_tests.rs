use ltex_fs::{NormalizedPath, WordFileCache, parse_words};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn test_normalization_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn test_parsed_words_are_trimmed_and_meaningful(content in "[a-z #\\n\\t]{0,80}") {
        for word in parse_words(&content) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.starts_with('#'));
            prop_assert_eq!(word.trim(), word.as_str());
        }
    }

    #[test]
    fn test_appended_words_load_back_exactly(words in prop::collection::vec("[a-zA-Z]{1,12}", 0..20)) {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("words.txt"));
        let cache = WordFileCache::new();

        let added = cache.append(&path, &words).unwrap();
        let expected: std::collections::BTreeSet<String> = words.iter().cloned().collect();

        prop_assert_eq!(added.len(), expected.len());
        prop_assert_eq!(WordFileCache::new().load(&path), expected);
    }
}
