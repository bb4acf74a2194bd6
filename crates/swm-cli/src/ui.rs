//! Terminal rendering for command results.

use anyhow::Result;
use crossterm::style::Stylize;
use serde_json::Value;
use swm_schema::Envelope;

/// Handle for styled status lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output;

impl Output {
    /// Create a new output handle.
    pub fn new() -> Self {
        Self
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        println!("  {} {message}", "ok".green().bold());
    }

    /// Print an error line.
    pub fn error(&self, message: &str) {
        eprintln!("  {} {message}", "error".red().bold());
    }

    /// Print a dim hint line under an error.
    pub fn hint(&self, message: &str) {
        eprintln!("        {}", message.to_string().dark_grey());
    }

    /// Print a plain informational line.
    pub fn info(&self, message: &str) {
        println!("  {message}");
    }
}

/// Print `envelope` as JSON, or hand its data to `render` for human
/// output. Failures render as styled error + hint in human mode.
pub fn emit<F>(envelope: &Envelope, json: bool, render: F) -> Result<()>
where
    F: FnOnce(&Value),
{
    if json {
        println!("{}", serde_json::to_string_pretty(envelope)?);
        return Ok(());
    }

    match (&envelope.data, envelope.error_info()) {
        (Some(data), _) => render(data),
        (None, Some(err)) => {
            let output = Output::new();
            output.error(&err.message);
            if let Some(hint) = &err.hint {
                output.hint(hint);
            }
        }
        (None, None) => {}
    }
    Ok(())
}

/// Helper for string fields out of an envelope data payload.
pub fn field<'a>(data: &'a Value, key: &str) -> &'a str {
    data[key].as_str().unwrap_or_default()
}
