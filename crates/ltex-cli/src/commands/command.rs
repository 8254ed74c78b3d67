//! Command command implementation: dispatch a raw server command

use std::io::Read;

use serde_json::{Value, json};

use crate::context::SyncContext;
use crate::error::{CliError, Result};

/// Read the command from `payload`, or stdin when it is `-`.
fn read_payload(payload: &str) -> Result<Value> {
    let text = if payload == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        payload.to_string()
    };
    Ok(serde_json::from_str(&text)?)
}

/// Run the command command
///
/// Prints `{"handled": bool, "report": ...}` so callers can forward the
/// follow-up messages to the server.
pub fn run_command(context: &SyncContext, payload: &str) -> Result<()> {
    let command = read_payload(payload)?;
    if !command.is_object() {
        return Err(CliError::user("Server command must be a JSON object"));
    }

    let report = context.session().handle_server_command(&command)?;
    let output = match &report {
        Some(report) => json!({ "handled": true, "report": report }),
        None => {
            tracing::debug!("Not a code-action command");
            json!({ "handled": false })
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
