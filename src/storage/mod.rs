//! Durable key-value storage for cached directory data.
//!
//! This module defines the `KeyValueStore` trait the cache manager is
//! written against, plus two implementations:
//!
//! - `FileStore`: one file per key under the platform cache directory
//! - `MemoryStore`: in-process map for tests and ephemeral runs

pub mod fs;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use fs::FileStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous string-keyed durable storage.
///
/// Values are opaque strings; serialization is the caller's concern.
/// Individual `set` calls are atomic per key, but no ordering or
/// transactional guarantees exist across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is not present.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the given keys in one batch. Missing keys are not an error.
    async fn delete_many(&self, keys: &[String]) -> Result<(), StorageError>;

    /// Enumerate every key currently present.
    async fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}
