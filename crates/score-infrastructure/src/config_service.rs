//! Configuration service implementation.
//!
//! Loads [`ScoreConfig`] from `~/.config/score/config.toml` (or an explicit
//! path) and caches it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use score_core::config::ScoreConfig;
use score_core::{Result, ScoreError};

use crate::paths::ScorePaths;
use crate::storage::AtomicTomlFile;

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "SCORE_API_BASE_URL";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ScoreConfig>>>,
}

impl ConfigService {
    /// Uses the default config path.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses a custom config path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it on first access.
    ///
    /// A missing file yields defaults; a file that does not parse is an error.
    pub fn get_config(&self) -> Result<ScoreConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| ScoreError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.load_config()?;
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            apply_base_url_override(&mut loaded, &base_url);
        }

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| ScoreError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<ScoreConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ScorePaths::config_file()?,
        };

        let config = AtomicTomlFile::<ScoreConfig>::new(path.clone())
            .load()
            .map_err(|e| ScoreError::config(format!("{}: {}", path.display(), e)))?;

        match config {
            Some(config) => {
                tracing::debug!("[ConfigService] Loaded configuration from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::debug!("[ConfigService] No configuration at {:?}, using defaults", path);
                Ok(ScoreConfig::default())
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_base_url_override(config: &mut ScoreConfig, base_url: &str) {
    let base_url = base_url.trim();
    if !base_url.is_empty() {
        config.api.base_url = base_url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.load_config().unwrap();
        assert_eq!(config, ScoreConfig::default());
    }

    #[test]
    fn test_loads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api]\ntimeout_secs = 5\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get_config().unwrap().api.timeout_secs, 5);

        fs::write(&path, "[api]\ntimeout_secs = 9\n").unwrap();
        assert_eq!(service.get_config().unwrap().api.timeout_secs, 5);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().api.timeout_secs, 9);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api\n").unwrap();

        let err = ConfigService::with_path(path).get_config().unwrap_err();
        assert!(matches!(err, ScoreError::Config(_)));
    }

    #[test]
    fn test_base_url_override_ignores_blank() {
        let mut config = ScoreConfig::default();
        apply_base_url_override(&mut config, "  ");
        assert_eq!(config.api.base_url, ScoreConfig::default().api.base_url);

        apply_base_url_override(&mut config, "https://hooks.example.test ");
        assert_eq!(config.api.base_url, "https://hooks.example.test");
    }
}
