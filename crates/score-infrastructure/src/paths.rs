//! Unified path management for score configuration and session storage.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/score/             # Config directory
//! └── config.toml              # API endpoints, storage and logging settings
//!
//! ~/.local/share/score/        # Data directory
//! └── session.toml             # Durable client storage (current user, selected company)
//! ```

use std::path::PathBuf;

use score_core::ScoreError;

const APP_DIR: &str = "score";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for ScoreError {
    fn from(err: PathError) -> Self {
        ScoreError::config(err.to_string())
    }
}

pub struct ScorePaths;

impl ScorePaths {
    /// Returns the score configuration directory (e.g. `~/.config/score/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the score data directory (e.g. `~/.local/share/score/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable session storage file.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("session.toml"))
    }
}
