//! Input validation.
//!
//! Validation runs before any catalog or registry access, so a malformed
//! parameter is always reported as `invalid_input` and never as
//! `software_not_found`.

use swm_schema::{ErrorCode, ErrorInfo, SoftwareName};

/// Longest accepted name or task parameter, in bytes after trimming.
pub const MAX_INPUT_LEN: usize = 100;

/// Validate and canonicalize a software name parameter.
///
/// # Errors
///
/// Returns an `invalid_input` [`ErrorInfo`] for empty, whitespace-only, or
/// overlong input.
pub fn software_name(raw: &str) -> Result<SoftwareName, ErrorInfo> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorInfo::new(
            ErrorCode::InvalidInput,
            "Software name cannot be empty or whitespace",
        ));
    }
    if trimmed.len() > MAX_INPUT_LEN {
        return Err(ErrorInfo::new(
            ErrorCode::InvalidInput,
            format!(
                "Software name too long: {} bytes (max {MAX_INPUT_LEN})",
                trimmed.len()
            ),
        ));
    }
    Ok(SoftwareName::new(trimmed))
}

/// Validate and canonicalize a recommendation task parameter.
///
/// # Errors
///
/// Returns an `invalid_input` [`ErrorInfo`] for empty, whitespace-only, or
/// overlong input.
pub fn task_name(raw: &str) -> Result<String, ErrorInfo> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorInfo::new(
            ErrorCode::InvalidInput,
            "Task cannot be empty or whitespace",
        ));
    }
    if trimmed.len() > MAX_INPUT_LEN {
        return Err(ErrorInfo::new(
            ErrorCode::InvalidInput,
            format!("Task too long: {} bytes (max {MAX_INPUT_LEN})", trimmed.len()),
        ));
    }
    Ok(trimmed.to_lowercase())
}
