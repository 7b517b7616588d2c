//! Staging Storage Abstraction
//!
//! Information Hiding:
//! - Storage backend implementation details hidden behind trait
//! - Values are opaque strings; callers own the encoding (JSON for staged agents)
//! - Allows swapping between memory and filesystem without touching merge logic

use anyhow::Result;
use async_trait::async_trait;

pub mod filesystem;
pub mod memory;

/// Key under which the registration flow stages new agents
pub const STAGED_AGENTS_KEY: &str = "newAgents";

/// Shared key-value storage between the registration flow and the dashboard
#[async_trait]
pub trait StagingStorage: Send + Sync {
    /// Read the raw value stored under `key`
    /// Returns `None` if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
