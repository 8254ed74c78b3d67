//! Server commands that carry code actions
//!
//! The language server asks the client to run `_ltex.addToDictionary`,
//! `_ltex.hideFalsePositives` or `_ltex.disableRules`. Their first argument
//! holds a language -> entries mapping under a command-specific key, and
//! optionally the `uri` of the document the action came from.

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Notification telling the server its settings changed.
pub const DID_CHANGE_CONFIGURATION: &str = "workspace/didChangeConfiguration";

/// Command asking the server to re-check a document.
pub const CHECK_DOCUMENT_COMMAND: &str = "_ltex.checkDocument";

/// Delay before the re-check, giving the server time to apply the settings.
pub const RECHECK_DELAY: Duration = Duration::from_millis(100);

/// (command, payload key, scope canonical key)
const CODE_ACTION_COMMANDS: [(&str, &str, &str); 3] = [
    ("_ltex.addToDictionary", "words", "ltex.dictionary"),
    ("_ltex.hideFalsePositives", "falsePositives", "ltex.hiddenFalsePositives"),
    ("_ltex.disableRules", "ruleIds", "ltex.disabledRules"),
];

/// A code action extracted from a server command.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeAction {
    pub command: String,
    /// Canonical settings key of the targeted scope
    pub scope_key: &'static str,
    /// Language tag -> entries to add
    pub values: Map<String, Value>,
    /// Document the action was triggered from
    pub uri: Option<String>,
}

impl CodeAction {
    /// Parse `{"command": ..., "arguments": [{payload}]}`.
    ///
    /// Returns `None` for commands that are not code actions or whose
    /// payload value is not an object; such commands are left to the host.
    pub fn from_command(command: &Value) -> Option<Self> {
        let name = command.get("command")?.as_str()?;
        let (_, payload_key, scope_key) = CODE_ACTION_COMMANDS
            .iter()
            .find(|(cmd, _, _)| *cmd == name)
            .copied()?;

        let payload = command
            .get("arguments")
            .and_then(Value::as_array)
            .and_then(|args| args.first())
            .and_then(Value::as_object)?;
        let values = payload.get(payload_key)?.as_object()?.clone();
        let uri = payload
            .get("uri")
            .and_then(Value::as_str)
            .filter(|uri| !uri.is_empty())
            .map(str::to_string);

        Some(Self {
            command: name.to_string(),
            scope_key,
            values,
            uri,
        })
    }
}

/// A message the transport should send to the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServerMessage {
    Notification {
        method: String,
        params: Value,
    },
    ExecuteCommand {
        command: String,
        arguments: Vec<Value>,
        /// Milliseconds to wait before sending
        delay_ms: u64,
    },
}

impl ServerMessage {
    /// `workspace/didChangeConfiguration` carrying expanded settings.
    pub fn did_change_configuration(expanded: Map<String, Value>) -> Self {
        Self::Notification {
            method: DID_CHANGE_CONFIGURATION.to_string(),
            params: json!({ "settings": expanded }),
        }
    }

    /// Delayed `_ltex.checkDocument` for `uri`.
    pub fn check_document(uri: &str) -> Self {
        Self::ExecuteCommand {
            command: CHECK_DOCUMENT_COMMAND.to_string(),
            arguments: vec![json!({ "uri": uri })],
            delay_ms: RECHECK_DELAY.as_millis() as u64,
        }
    }
}
