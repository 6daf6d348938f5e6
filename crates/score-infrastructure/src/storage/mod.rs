//! Durable client storage implementations.

mod atomic_toml;
mod memory_kv_store;
mod toml_kv_store;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
pub use memory_kv_store::MemoryKeyValueStore;
pub use toml_kv_store::TomlKeyValueStore;
