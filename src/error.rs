//! Centralized error types for the `rmine` tool.
//!
//! Library failures keep their own types; this module wraps them so `main`
//! can print one message and exit.

use thiserror::Error;

use crate::api::error::ApiError;
use crate::config::ConfigError;
use crate::editor::EditorError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// External editor errors, including a canceled edit.
    #[error("{0}")]
    Editor(#[from] EditorError),

    /// IO errors (writing the report, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a message suitable for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(source) => {
                    format!("Failed to read config file: {}", source)
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(source) => {
                    format!("Configuration file is invalid: {}", source)
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::ProfileNotFound(name) => {
                    format!("No settings found for profile '{}'.", name)
                }
            },
            AppError::Api(e) => match e {
                ApiError::InvalidConfig(msg) => format!("Configuration error: {}", msg),
                ApiError::NotFound(resource) => format!("Not Found: {}", resource),
                ApiError::Request { .. } => {
                    format!("Could not reach Redmine. Please check the endpoint and your network. ({})", e)
                }
                ApiError::Remote { status, message } if status.as_u16() == 401 => {
                    format!("Authentication failed ({}). Please check your API key.", message)
                }
                ApiError::Remote { status, message } if status.as_u16() == 403 => {
                    format!("Access denied ({}).", message)
                }
                _ => e.to_string(),
            },
            AppError::Editor(e) => e.to_string(),
            AppError::Io(e) => format!("A file operation failed: {}", e),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::NoConfigDir)
            | AppError::Config(ConfigError::ProfileNotFound(_)) => {
                Some("Run 'rmine config init <endpoint> <apikey> <project>' to create a settings file.")
            }
            AppError::Api(ApiError::Remote { status, .. }) if status.as_u16() == 401 => {
                Some("Your API key is shown under 'My account' in Redmine.")
            }
            AppError::Api(ApiError::Request { .. }) => {
                Some("Set \"insecure\": true in the settings file if the server uses a self-signed certificate.")
            }
            AppError::Editor(EditorError::EditorSpawn { .. }) => {
                Some("Set \"editor\" in the settings file or the EDITOR environment variable.")
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
