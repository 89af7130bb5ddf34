//! CLI response formatting and output.
//!
//! Provides the JSON envelope, plain-text printing, and exit code mapping.

use project_manager::error::Hint;
use project_manager::{Error, Result};
use serde::Serialize;

use crate::commands::CommandOutput;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_stdout(payload: &str) {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Broken pipe and friends are not worth a second error report.
    let _ = writeln!(handle, "{}", payload);
}

fn print_response<T: Serialize>(response: &CliResponse<T>) {
    match response.to_json() {
        Ok(payload) => write_stdout(&payload),
        Err(err) => print_plain_error(&err),
    }
}

/// Every failure ends the process with status 1; the printed message is what
/// tells the error classes apart.
pub fn map_cmd_result<T>(result: Result<(T, i32)>) -> (Result<T>, i32) {
    match result {
        Ok((data, exit_code)) => (Ok(data), exit_code),
        Err(err) => (Err(err), 1),
    }
}

pub fn print_json_result(result: Result<CommandOutput>) {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn print_plain_result(result: Result<CommandOutput>) {
    match result {
        Ok(data) => {
            let lines: Vec<String> = data
                .next_steps()
                .iter()
                .map(|step| format!("- {}", step))
                .collect();
            write_stdout(&format!("\n{}", lines.join("\n")));
        }
        Err(err) => print_plain_error(&err),
    }
}

fn print_plain_error(err: &Error) {
    eprintln!("Error: {}", err.message);
    for hint in &err.hints {
        eprintln!("  {}", hint.message);
    }
}
