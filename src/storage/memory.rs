//! In-Memory Staging Storage
//!
//! Information Hiding:
//! - HashMap storage structure hidden from users
//! - Thread-safe access via RwLock hidden behind async interface
//! - Suitable for testing and single-process demos

use super::StagingStorage;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage using HashMap
/// Data is lost when process terminates
#[derive(Clone)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StagingStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        let value = entries.get(key).cloned();
        tracing::debug!(
            "[InMemoryStorage] Read key '{}' ({})",
            key,
            if value.is_some() { "hit" } else { "miss" }
        );
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        tracing::debug!("[InMemoryStorage] Wrote {} bytes to key '{}'", value.len(), key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        tracing::debug!("[InMemoryStorage] Removed key '{}'", key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(key))
    }
}
