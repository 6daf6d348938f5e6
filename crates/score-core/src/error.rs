//! Error types for the Score application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Score workspace.
///
/// Login failures are split into the two kinds the UI distinguishes:
/// an unrecognized access level in the authentication response, and a
/// transport failure before a usable response was obtained.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoreError {
    /// The authentication response carried an access level outside the known set.
    #[error("Unknown access level: '{level}'")]
    UnknownAccessLevel { level: String },

    /// Network or HTTP failure while talking to the webhook API
    #[error("Communication error: {0}")]
    Communication(String),

    /// A login request is already in flight
    #[error("A login request is already in progress")]
    LoginInProgress,

    /// Durable key/value storage error
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation not valid for the current session state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScoreError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownAccessLevel error carrying the raw discriminator
    pub fn unknown_access_level(level: impl Into<String>) -> Self {
        Self::UnknownAccessLevel {
            level: level.into(),
        }
    }

    /// Creates a Communication error
    pub fn communication(message: impl Into<String>) -> Self {
        Self::Communication(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidOperation error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_unknown_access_level(&self) -> bool {
        matches!(self, Self::UnknownAccessLevel { .. })
    }

    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication(_))
    }

    /// Whether the user can reasonably retry by re-submitting the form.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Communication(_) | Self::LoginInProgress)
    }

    /// Message suitable for showing to the end user.
    ///
    /// Diagnostic details (raw discriminators, HTTP bodies) stay in the
    /// `Display` output and the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnknownAccessLevel { .. } => "Could not process login.",
            Self::Communication(_) => {
                "Could not reach the server. Check your connection and try again."
            }
            Self::LoginInProgress => "Login already in progress, please wait.",
            Self::InvalidOperation(_) => "This action is not available for your account.",
            _ => "An unexpected error occurred.",
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ScoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ScoreError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used at crate boundaries)
impl From<anyhow::Error> for ScoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ScoreError>`.
pub type Result<T> = std::result::Result<T, ScoreError>;
