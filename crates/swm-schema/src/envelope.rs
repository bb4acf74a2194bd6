//! The uniform result envelope returned by every operation.
//!
//! Success carries `data`, failure carries `error`; never both. The error
//! codes form a closed set that callers can match on without parsing
//! message text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of error codes observable at the tool boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Software (or recommendation task) not found in the catalog.
    SoftwareNotFound,
    /// Software is already installed.
    AlreadyInstalled,
    /// Software is not installed.
    NotInstalled,
    /// Software is already at the latest version.
    UpToDate,
    /// Input validation failed.
    InvalidInput,
    /// Error reading or writing the software registry.
    RegistryError,
    /// Required configuration is missing or unusable.
    ConfigMissing,
}

impl ErrorCode {
    /// The snake_case string form used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftwareNotFound => "software_not_found",
            Self::AlreadyInstalled => "already_installed",
            Self::NotInstalled => "not_installed",
            Self::UpToDate => "up_to_date",
            Self::InvalidInput => "invalid_input",
            Self::RegistryError => "registry_error",
            Self::ConfigMissing => "config_missing",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error information for failed operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable error identifier.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Recovery guidance, when there is a concrete next step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Create an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a recovery hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Uniform response shape for every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `true` if the operation succeeded.
    pub ok: bool,
    /// Result payload, present iff `ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error information, present iff `!ok`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl Envelope {
    /// A successful envelope carrying `data`.
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed envelope carrying `error`.
    pub fn failure(error: ErrorInfo) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }

    /// The error info, if this envelope is a failure.
    pub fn error_info(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }
}

impl From<ErrorInfo> for Envelope {
    fn from(error: ErrorInfo) -> Self {
        Self::failure(error)
    }
}
