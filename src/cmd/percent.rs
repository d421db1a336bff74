use serde_json::{Value, json};

use crate::domain::percent::parse_percentage;

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run(input: &str) -> PercentCommandResponse {
    match parse_percentage(input) {
        Ok(percent) => PercentCommandResponse {
            exit_code: 0,
            payload: json!({"percent": percent.get()}),
        },
        Err(error) => PercentCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "kind": error.kind(),
                "message": error.to_string(),
            }),
        },
    }
}
