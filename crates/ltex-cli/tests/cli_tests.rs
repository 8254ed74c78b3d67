//! CLI end-to-end tests that invoke the compiled `ltex-sync` binary.

use assert_cmd::Command;
use ltex_test_utils::TestHost;
use predicates::prelude::*;
use serde_json::{Value, json};

/// `ltex-sync` rooted at the host's data directory.
fn ltex_sync(host: &TestHost) -> Command {
    let mut cmd = Command::cargo_bin("ltex-sync").unwrap();
    cmd.env_remove("LTEX_SYNC_SETTINGS")
        .env_remove("LTEX_SYNC_STORAGE")
        .env("LTEX_SYNC_DATA_ROOT", host.root())
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_lists_commands() {
    let host = TestHost::new();
    ltex_sync(&host)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("scopes"));
}

#[test]
fn test_no_command_shows_hint() {
    let host = TestHost::new();
    ltex_sync(&host)
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_add_inline_then_expand_json() {
    let host = TestHost::new();

    ltex_sync(&host)
        .args(["add", "--scope", "dictionary", "--lang", "en-US", "foo", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    assert_eq!(
        host.read_settings()["settings"]["ltex.dictionary"],
        json!({"en-US": ["foo", "bar"]})
    );

    let output = ltex_sync(&host).args(["expand", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["ltex.dictionary"]["en-US"], json!(["foo", "bar"]));
}

#[test]
fn test_add_external_writes_word_file() {
    let host = TestHost::new();
    host.write_settings(&json!({"use_external_disabled_rules_files": true}));

    let output = ltex_sync(&host)
        .args(["add", "-s", "disabled-rules", "-l", "de-DE", "RULE_X", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let outcome = stdout_json(&output);
    assert_eq!(outcome["scope_key"], "ltex.disabledRules");
    assert_eq!(outcome["configuration_changed"], true);
    host.assert_words(
        host.default_word_file("disabled_rules", "disabledRules.de-DE.txt"),
        &["RULE_X"],
    );
}

#[test]
fn test_expand_reads_word_file() {
    let host = TestHost::new();
    let file = host.write_word_file("words/en-US.txt", &["zeta", "alpha"]);
    host.write_settings(&json!({
        "settings": {"ltex.dictionary": {"en-US": [format!(":{}", file.display())]}}
    }));

    let output = ltex_sync(&host).args(["expand", "--json"]).output().unwrap();

    assert_eq!(
        stdout_json(&output),
        json!({"ltex.dictionary": {"en-US": ["alpha", "zeta"]}})
    );
}

#[test]
fn test_command_reports_follow_up_messages() {
    let host = TestHost::new();
    let file = host.write_word_file("LSP-ltex-plus/dictionaries/en-US.txt", &["old"]);
    host.write_settings(&json!({
        "use_external_dictionary_files": true,
        "settings": {"ltex.dictionary": {"en-US": [format!(":{}", file.display())]}}
    }));
    let command = json!({
        "command": "_ltex.addToDictionary",
        "arguments": [{"uri": "file:///doc.md", "words": {"en-US": ["new"]}}]
    });

    let output = ltex_sync(&host)
        .args(["command", "-"])
        .write_stdin(command.to_string())
        .output()
        .unwrap();

    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["handled"], true);
    let messages = result["report"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["method"], "workspace/didChangeConfiguration");
    assert_eq!(messages[1]["command"], "_ltex.checkDocument");
    assert_eq!(messages[1]["delay_ms"], 100);
}

#[test]
fn test_command_ignores_other_commands() {
    let host = TestHost::new();
    let output = ltex_sync(&host)
        .args(["command", r#"{"command": "_ltex.checkDocument"}"#])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"handled": false}));
}

#[test]
fn test_invalid_json_fails() {
    let host = TestHost::new();
    ltex_sync(&host)
        .args(["command", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_scopes_shows_directories() {
    let host = TestHost::new();
    host.write_settings(&json!({"external_dictionary_dir": "custom"}));

    ltex_sync(&host)
        .arg("scopes")
        .assert()
        .success()
        .stdout(predicate::str::contains("ltex.hiddenFalsePositives"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn test_server_shows_download_url() {
    let host = TestHost::new();
    host.write_settings(&json!({"version": "18.0.0"}));

    ltex_sync(&host)
        .args(["server", "--os", "macos", "--arch", "aarch64"])
        .arg("--storage")
        .arg(host.path("storage"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ltex-ls-plus-18.0.0-mac-arm64.tar.gz"))
        .stdout(predicate::str::contains("not installed"));
}
