//! Domain layer for Score Inteligente.
//!
//! Holds the typed identity model and its resolver, the session object, the
//! navigation gate decision policy and the ports to the webhook API and
//! durable client storage. Nothing here performs I/O.

pub mod activity;
pub mod config;
pub mod error;
mod fields;
pub mod identity;
pub mod navigation;
pub mod oral_test;
pub mod repository;
pub mod score;
pub mod session;
pub mod survey;

// Re-export common error type
pub use error::{Result, ScoreError};
