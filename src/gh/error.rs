//! Error types for gh CLI operations
//!
//! A closed set of error kinds covers every failure this server can
//! surface, from a missing token through malformed `gh` output. Each kind
//! converts to the uniform `{status, code, message, details}` envelope that
//! tool responses carry, so error shape is identical regardless of where
//! the failure originated.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur when resolving parameters or executing gh commands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GhError {
    /// No GitHub token in the environment and gh is not authenticated
    #[error("GitHub token not found - set GITHUB_TOKEN or GH_TOKEN or run 'gh auth login'")]
    TokenNotFound,

    /// gh CLI is not installed or not in PATH
    #[error("gh CLI not found - ensure gh is installed and in PATH")]
    CliNotFound,

    /// The gh command failed with a non-zero exit code
    #[error("gh command failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Exit code from the gh process
        code: i32,
        /// Captured stderr (or stdout when stderr was empty)
        stderr: String,
    },

    /// gh produced output that does not match the declared shape
    #[error("expected {expected} output but received a non-matching string")]
    UnexpectedOutputFormat {
        /// The shape the subcommand was declared to produce
        expected: &'static str,
        /// The untouched stdout
        raw: String,
    },

    /// Anything else that went wrong during spawn or I/O
    #[error("unexpected error: {message}")]
    Unexpected { message: String },

    /// A parameter was requested that the static config table does not declare
    #[error("config param '{param}' not found in category '{category}'")]
    ConfigParamNotFound { category: String, param: String },

    /// A required parameter resolved to nothing
    #[error("required parameter '{param}' is missing")]
    RequiredParamMissing { param: String },

    /// A parameter value is outside its legal set
    #[error("invalid parameter '{param}'; must be one of: {}", valid.join(", "))]
    InvalidParam { param: String, valid: Vec<String> },
}

/// Result type alias for gh operations
pub type GhResult<T> = Result<T, GhError>;

impl GhError {
    /// Stable error code carried in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GhError::TokenNotFound => "GH_TOKEN_NOT_FOUND",
            GhError::CliNotFound => "GH_CLI_NOT_FOUND",
            GhError::CommandFailed { .. } => "GH_COMMAND_FAILED",
            GhError::UnexpectedOutputFormat { .. } => "UNEXPECTED_OUTPUT_FORMAT",
            GhError::Unexpected { .. } => "GH_UNEXPECTED_ERROR",
            GhError::ConfigParamNotFound { .. } => "CONFIG_PARAM_NOT_FOUND",
            GhError::RequiredParamMissing { .. } => "REQUIRED_PARAM_MISSING",
            GhError::InvalidParam { .. } => "INVALID_PARAM",
        }
    }

    /// Convert into the uniform error envelope.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let details = match self {
            GhError::CommandFailed { code, stderr } => Some(json!({
                "exit_code": code,
                "stderr": stderr,
            })),
            GhError::UnexpectedOutputFormat { raw, .. } => Some(json!({ "raw": raw })),
            _ => None,
        };
        ErrorEnvelope {
            status: "FAILED",
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }

    pub fn required_param(param: impl Into<String>) -> Self {
        GhError::RequiredParamMissing {
            param: param.into(),
        }
    }

    pub fn invalid_param(param: impl Into<String>, valid: &[&str]) -> Self {
        GhError::InvalidParam {
            param: param.into(),
            valid: valid.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The uniform error shape every failed tool call returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    /// Always "FAILED"
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// JSON form of the envelope. Infallible by construction.
    pub fn to_value(&self) -> Value {
        let mut obj = json!({
            "status": self.status,
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = &self.details {
            obj["details"] = details.clone();
        }
        obj
    }
}
