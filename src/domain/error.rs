use std::io;

use thiserror::Error;

/// Library-wide error type for foyer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Schedule value rejected by the domain rules.
    #[error(transparent)]
    Schedule(#[from] crate::domain::schedule::ScheduleError),

    /// Personnel identifier is not part of the loaded personnel list.
    #[error("Personnel '{0}' not found")]
    PersonnelNotFound(String),

    /// Request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Backend answered with a non-success status.
    #[error("{}", describe_backend_failure(.message, .status))]
    Backend { message: Option<String>, status: Option<u16> },

    /// Backend answered with a body that does not match the documented schema.
    #[error("Unexpected response from {endpoint}: {details}")]
    BackendContract { endpoint: String, details: String },

    /// Document generation failed before anything was written.
    #[error("Export failed: {0}")]
    Export(String),

    /// Export job was cancelled before completion.
    #[error("Export cancelled")]
    ExportCancelled,

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Message for a user-facing banner: the server's own words when it sent
    /// some, `fallback` otherwise.
    pub fn banner_message(&self, fallback: &str) -> String {
        match self {
            AppError::Backend { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn describe_backend_failure(message: &Option<String>, status: &Option<u16>) -> String {
    match (message, status) {
        (Some(message), Some(status)) => format!("Backend error (HTTP {}): {}", status, message),
        (Some(message), None) => format!("Backend error: {}", message),
        (None, Some(status)) => format!("Backend request failed with HTTP {}", status),
        (None, None) => "Backend request failed".to_string(),
    }
}
