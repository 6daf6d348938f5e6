//! Infrastructure layer for Score Inteligente.
//!
//! Implements the core ports: the reqwest webhook client, file-backed and
//! in-memory key/value stores, path resolution and configuration loading.

pub mod config_service;
pub mod paths;
pub mod storage;
pub mod webhook_client;

pub use crate::config_service::ConfigService;
pub use crate::storage::{MemoryKeyValueStore, TomlKeyValueStore};
pub use crate::webhook_client::WebhookClient;
