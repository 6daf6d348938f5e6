//! Configuration models.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default so a missing or partial file still yields a usable
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are joined to.
    pub base_url: String,
    pub timeout_secs: u64,
    pub endpoints: EndpointConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_secs: 30,
            endpoints: EndpointConfig::default(),
        }
    }
}

/// Webhook paths, relative to `ApiConfig::base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub login: String,
    pub company_categories: String,
    pub employee_categories: String,
    pub company_questions: String,
    pub employee_questions: String,
    pub questionnaire_submissions: String,
    pub neuromapa_submissions: String,
    pub oral_test_assignments: String,
    pub activity_log: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            login: "/webhook/login".to_string(),
            company_categories: "/webhook/categories/company".to_string(),
            employee_categories: "/webhook/categories/employee".to_string(),
            company_questions: "/webhook/questions/company".to_string(),
            employee_questions: "/webhook/questions/employee".to_string(),
            questionnaire_submissions: "/webhook/submissions".to_string(),
            neuromapa_submissions: "/webhook/neuromapa/submissions".to_string(),
            oral_test_assignments: "/webhook/oral-tests/assignments".to_string(),
            activity_log: "/webhook/activity-log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session storage file. `None` uses the platform data directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
