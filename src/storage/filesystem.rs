//! File System Staging Storage
//!
//! Information Hiding:
//! - File paths and naming scheme hidden from users
//! - Directory structure management hidden behind interface
//! - Lets the `register` command and the dashboard run as separate processes

use super::StagingStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// File system storage - each key is a JSON file
/// Files are stored as {base_path}/{key}.json
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    pub async fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)
            .await
            .context("Failed to create staging directory")?;

        Ok(Self { base_path })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StagingStorage for FileSystemStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            tracing::debug!("[FileSystemStorage] Key '{}' does not exist", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path)
            .await
            .context(format!("Failed to read staging file: {:?}", path))?;

        tracing::debug!(
            "[FileSystemStorage] Read {} bytes for key '{}' from {:?}",
            value.len(),
            key,
            path
        );
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        fs::write(&path, value)
            .await
            .context(format!("Failed to write staging file: {:?}", path))?;

        tracing::debug!("[FileSystemStorage] Wrote key '{}' to {:?}", key, path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .context(format!("Failed to delete staging file: {:?}", path))?;
            tracing::debug!("[FileSystemStorage] Removed key '{}' at {:?}", key, path);
        } else {
            tracing::debug!("[FileSystemStorage] Key '{}' does not exist, nothing to remove", key);
        }

        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.key_path(key).exists())
    }
}
