use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::{ErrorKind, MatchError};
use crate::domain::operand::Operand;
use crate::domain::validation::Validation;

/// Input arguments for check command execution API.
#[derive(Debug, Clone, Default)]
pub struct CheckCommandArgs {
    pub match_type: String,
    pub match_value: Option<String>,
    /// Expected value as JSON text. `None` means `null`.
    pub expected: Option<String>,
    /// Observed value as JSON text.
    pub value: String,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run(args: &CheckCommandArgs) -> CheckCommandResponse {
    match execute(args) {
        Ok(matched) => CheckCommandResponse {
            exit_code: if matched { 0 } else { 2 },
            payload: json!({
                "matched": matched,
                "match_type": args.match_type,
            }),
        },
        Err(CommandError::InputUsage { kind, message }) => CheckCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "kind": kind,
                "message": message,
            }),
        },
        Err(CommandError::Internal(message)) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": message,
            }),
        },
    }
}

fn execute(args: &CheckCommandArgs) -> Result<bool, CommandError> {
    let expected = match args.expected.as_deref() {
        Some(text) => parse_operand("expected", text)?,
        None => Operand::Nil,
    };
    let observed = parse_operand("value", &args.value)?;

    let validation = Validation {
        match_type: args.match_type.clone(),
        match_value: args.match_value.clone(),
        expected_value: expected,
    };
    validation.matches(&observed).map_err(map_match_error)
}

fn parse_operand(label: &str, text: &str) -> Result<Operand, CommandError> {
    serde_json::from_str::<Value>(text)
        .map(Operand::from_json)
        .map_err(|err| CommandError::InputUsage {
            kind: ErrorKind::Format,
            message: format!("--{label} must be valid JSON: {err}"),
        })
}

fn map_match_error(error: MatchError) -> CommandError {
    match error.kind() {
        ErrorKind::Serialization | ErrorKind::Order => CommandError::Internal(error.to_string()),
        kind => CommandError::InputUsage {
            kind,
            message: error.to_string(),
        },
    }
}

enum CommandError {
    InputUsage { kind: ErrorKind, message: String },
    Internal(String),
}
