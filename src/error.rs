use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JojoError {
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Metric computation error: {0}")]
    Metric(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl JojoError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JojoError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn metric(message: impl Into<String>) -> Self {
        JojoError::Metric(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        JojoError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            JojoError::FileAccess { source, .. } => {
                let remediation = match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        "Verify the file exists; use an absolute path or run from the working directory."
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        "Check file permissions for the current user."
                    }
                    std::io::ErrorKind::InvalidData => {
                        "Response files must be UTF-8 text; re-export the response as plain text."
                    }
                    _ => "Check file paths/permissions.",
                };
                ErrorPayload::new(ErrorCategory::FileAccess, self.to_string(), remediation)
            }
            JojoError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check output paths/permissions.",
            ),
            JojoError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
            JojoError::Toml(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Fix the TOML syntax in the config file (see --config).",
            ),
            JojoError::Pattern(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check the opportunity markers in the config file.",
            ),
            JojoError::Metric(msg) => ErrorPayload::new(
                ErrorCategory::Metric,
                msg.to_string(),
                "Inspect metric inputs; try rerunning with --verbose.",
            ),
            JojoError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("saturation") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Set [opportunity] saturation to a positive number (default 5).",
                    )
                } else if lower.contains("weight") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Resonance weights must be finite and non-negative.",
                    )
                } else if lower.contains("precision") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a precision between 0 and 6 decimals.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file values.",
                    )
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JojoError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    FileAccess,
    Config,
    Metric,
    Io,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
