//! Tests for settings expansion

use ltex_core::{ConfigDocument, SettingsExpander};
use ltex_fs::WordFileCache;
use ltex_test_utils::TestHost;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn doc(value: Value) -> ConfigDocument {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_document_without_markers_is_unchanged() {
    let cache = WordFileCache::new();
    let input = doc(json!({
        "ltex.language": "en-US",
        "ltex.dictionary": {"en-US": ["foo", "bar"]},
        "disabledRules": {"de-DE": ["RULE_A"]},
        "ltex.additionalRules.enablePickyRules": true
    }));

    let expanded = SettingsExpander::new(&cache).expand(&input);

    assert_eq!(expanded, input);
    assert!(cache.is_empty(), "no file should have been consulted");
}

#[test]
fn test_marker_is_replaced_with_sorted_words() {
    let host = TestHost::new();
    let file = host.write_word_file("dicts/en-US.txt", &["zebra", "# comment", "apple", "", "mango"]);
    let input = doc(json!({
        "ltex.dictionary": {
            "en-US": [format!(":{}", file.display())],
            "de-DE": ["inline"]
        }
    }));

    let expanded = SettingsExpander::new(&WordFileCache::new()).expand(&input);

    assert_eq!(
        Value::Object(expanded),
        json!({
            "ltex.dictionary": {
                "en-US": ["apple", "mango", "zebra"],
                "de-DE": ["inline"]
            }
        })
    );
}

#[test]
fn test_input_is_not_mutated() {
    let host = TestHost::new();
    let file = host.write_word_file("en-US.txt", &["word"]);
    let marker = format!(":{}", file.display());
    let input = doc(json!({"ltex.disabledRules": {"en-US": [marker.clone()]}}));
    let before = input.clone();

    let _ = SettingsExpander::new(&WordFileCache::new()).expand(&input);

    assert_eq!(input, before);
    assert_eq!(input["ltex.disabledRules"]["en-US"], json!([marker]));
}

#[test]
fn test_missing_file_expands_to_empty_list() {
    let host = TestHost::new();
    let missing = host.path("nowhere/en-US.txt");
    let input = doc(json!({"ltex.dictionary": {"en-US": [format!(":{}", missing.display())]}}));

    let expanded = SettingsExpander::new(&WordFileCache::new()).expand(&input);

    assert_eq!(expanded["ltex.dictionary"]["en-US"], json!([]));
    host.assert_file_not_exists("nowhere/en-US.txt");
}

#[test]
fn test_alias_key_is_expanded() {
    let host = TestHost::new();
    let file = host.write_word_file("fp.txt", &["false positive"]);
    let input = doc(json!({
        "hiddenFalsePositives": {"en-US": [format!(":{}", file.display())]}
    }));

    let expanded = SettingsExpander::new(&WordFileCache::new()).expand(&input);

    assert_eq!(expanded["hiddenFalsePositives"]["en-US"], json!(["false positive"]));
    assert!(!expanded.contains_key("ltex.hiddenFalsePositives"));
}

#[test]
fn test_canonical_key_wins_over_alias() {
    let host = TestHost::new();
    let file = host.write_word_file("en-US.txt", &["word"]);
    let marker = format!(":{}", file.display());
    let input = doc(json!({
        "dictionary": {"en-US": [marker.clone()]},
        "ltex.dictionary": {"en-US": [marker.clone()]}
    }));

    let expanded = SettingsExpander::new(&WordFileCache::new()).expand(&input);

    assert_eq!(expanded["ltex.dictionary"]["en-US"], json!(["word"]));
    assert_eq!(expanded["dictionary"]["en-US"], json!([marker]));
}

#[test]
fn test_non_mapping_scope_value_is_left_alone() {
    let input = doc(json!({"ltex.dictionary": ["not", "a", "mapping"]}));
    let expanded = SettingsExpander::new(&WordFileCache::new()).expand(&input);
    assert_eq!(expanded, input);
}

#[test]
fn test_expansion_reflects_later_file_edits() {
    let host = TestHost::new();
    let file = host.write_word_file("en-US.txt", &["one"]);
    let input = doc(json!({"ltex.dictionary": {"en-US": [format!(":{}", file.display())]}}));
    let cache = WordFileCache::new();
    let expander = SettingsExpander::new(&cache);

    assert_eq!(expander.expand(&input)["ltex.dictionary"]["en-US"], json!(["one"]));

    std::fs::write(&file, "one\ntwo\n").unwrap();
    let f = std::fs::File::options().write(true).open(&file).unwrap();
    f.set_modified(std::time::SystemTime::now() + std::time::Duration::from_secs(10))
        .unwrap();

    assert_eq!(
        expander.expand(&input)["ltex.dictionary"]["en-US"],
        json!(["one", "two"])
    );
}
