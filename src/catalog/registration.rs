//! Agent Registration
//!
//! Turns a filled-in registration form into a catalog record and stages it
//! for the next catalog merge.

use super::record::{AgentKind, AgentLayer, AgentRecord, AgentStatus, ResourceUsage};
use crate::error::DiscoveryError;
use crate::storage::StagingStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Relevance assigned to freshly registered agents
pub const REGISTERED_RELEVANCE: u32 = 70;

/// Registration form as submitted by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub kind: String,
    pub layer: String,
    pub description: String,
    /// Comma-separated capability tags
    pub capabilities: String,
    pub cpu: u8,
    pub memory: u8,
    pub endpoint: Option<String>,
}

impl Registration {
    /// Check required fields and ranges, returning the parsed kind and layer
    pub fn validate(&self) -> Result<(AgentKind, AgentLayer), DiscoveryError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("type", &self.kind),
            ("layer", &self.layer),
            ("description", &self.description),
            ("capabilities", &self.capabilities),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();

        if !missing.is_empty() {
            return Err(DiscoveryError::Registration(format!(
                "please fill in all required fields (missing: {})",
                missing.join(", ")
            )));
        }

        if self.cpu > 100 || self.memory > 100 {
            return Err(DiscoveryError::Registration(
                "cpu and memory must be between 0 and 100".to_string(),
            ));
        }

        let kind = self.kind.parse::<AgentKind>().map_err(DiscoveryError::Registration)?;
        let layer = self.layer.parse::<AgentLayer>().map_err(DiscoveryError::Registration)?;

        if self.capability_tags().is_empty() {
            return Err(DiscoveryError::Registration(
                "at least one capability is required".to_string(),
            ));
        }

        Ok((kind, layer))
    }

    fn capability_tags(&self) -> Vec<String> {
        self.capabilities
            .split(',')
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the record; `now_millis` becomes the id suffix
    pub fn into_record(self, now_millis: u128) -> Result<AgentRecord, DiscoveryError> {
        let (kind, layer) = self.validate()?;
        let capabilities = self.capability_tags();

        Ok(AgentRecord {
            id: format!("{}-{}", kind, now_millis),
            name: self.name.trim().to_string(),
            kind,
            status: AgentStatus::Active,
            layer,
            resource_usage: ResourceUsage {
                cpu: self.cpu,
                memory: self.memory,
            },
            capabilities,
            description: self.description.trim().to_string(),
            base_relevance: REGISTERED_RELEVANCE,
            endpoint: self.endpoint.filter(|e| !e.trim().is_empty()),
        })
    }
}

/// Append a record to the staged list under `key`.
///
/// A staged value that is not a JSON array is replaced.
pub async fn stage(storage: &dyn StagingStorage, key: &str, record: &AgentRecord) -> Result<usize> {
    let mut staged: Vec<Value> = match storage.get(key).await? {
        Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("[Registration] Replacing unreadable staged list '{}': {}", key, e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    staged.push(serde_json::to_value(record)?);
    storage.set(key, &serde_json::to_string(&staged)?).await?;

    tracing::info!(
        "[Registration] Staged '{}' ({}), {} pending",
        record.name,
        record.id,
        staged.len()
    );
    Ok(staged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::merge::merge_staged;
    use crate::catalog::AgentCatalog;
    use crate::storage::memory::InMemoryStorage;
    use crate::storage::STAGED_AGENTS_KEY;

    fn form() -> Registration {
        Registration {
            name: "DroneAgent".to_string(),
            kind: "agent".to_string(),
            layer: "edge".to_string(),
            description: "Aerial survey agent".to_string(),
            capabilities: "aerial video, mapping , ,photogrammetry".to_string(),
            cpu: 40,
            memory: 55,
            endpoint: Some("http://drone.local:8080".to_string()),
        }
    }

    #[test]
    fn test_into_record() {
        let record = form().into_record(1_700_000_000_000).unwrap();

        assert_eq!(record.id, "agent-1700000000000");
        assert_eq!(record.status, AgentStatus::Active);
        assert_eq!(record.layer, AgentLayer::Edge);
        assert_eq!(record.capabilities, vec!["aerial video", "mapping", "photogrammetry"]);
        assert_eq!(record.base_relevance, REGISTERED_RELEVANCE);
        assert_eq!(record.endpoint.as_deref(), Some("http://drone.local:8080"));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut f = form();
        f.name = "  ".to_string();
        f.description.clear();

        let err = f.validate().unwrap_err().to_string();
        assert!(err.contains("name"));
        assert!(err.contains("description"));
    }

    #[test]
    fn test_rejects_unknown_kind_and_bad_usage() {
        let mut f = form();
        f.kind = "robot".to_string();
        assert!(f.validate().is_err());

        let mut f = form();
        f.cpu = 120;
        assert!(f.validate().is_err());

        let mut f = form();
        f.capabilities = " , ,".to_string();
        assert!(f.validate().is_err());
    }

    #[tokio::test]
    async fn test_stage_appends_to_list() {
        let storage = InMemoryStorage::new();
        let first = form().into_record(1).unwrap();
        let second = form().into_record(2).unwrap();

        assert_eq!(stage(&storage, STAGED_AGENTS_KEY, &first).await.unwrap(), 1);
        assert_eq!(stage(&storage, STAGED_AGENTS_KEY, &second).await.unwrap(), 2);

        let raw = storage.get(STAGED_AGENTS_KEY).await.unwrap().unwrap();
        let list: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(list[0]["id"], "agent-1");
        assert_eq!(list[1]["id"], "agent-2");
    }

    #[tokio::test]
    async fn test_stage_replaces_garbage() {
        let storage = InMemoryStorage::new();
        storage.set(STAGED_AGENTS_KEY, "oops").await.unwrap();

        let record = form().into_record(3).unwrap();
        assert_eq!(stage(&storage, STAGED_AGENTS_KEY, &record).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_staged_record_survives_merge() {
        let storage = InMemoryStorage::new();
        let record = form().into_record(4).unwrap();
        stage(&storage, STAGED_AGENTS_KEY, &record).await.unwrap();

        let mut catalog = AgentCatalog::with_seed();
        merge_staged(&mut catalog, &storage, STAGED_AGENTS_KEY).await.unwrap();

        assert_eq!(catalog.get("agent-4"), Some(&record));
    }
}
