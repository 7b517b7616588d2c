//! Agent Record Types
//!
//! Information Hiding:
//! - Wire field names (`type`, `cpu`, `relevance`) hidden behind serde attributes
//! - Staged records are validated here before they can become catalog entries

use crate::error::DiscoveryError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback relevance for records that arrive without one
pub const DEFAULT_BASE_RELEVANCE: u32 = 70;

static AGENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("static regex"));

/// Category of an addressable entity in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Agent,
    Llm,
    Tool,
    Compute,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Agent,
        AgentKind::Llm,
        AgentKind::Tool,
        AgentKind::Compute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Agent => "agent",
            AgentKind::Llm => "llm",
            AgentKind::Tool => "tool",
            AgentKind::Compute => "compute",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agent" => Ok(AgentKind::Agent),
            "llm" => Ok(AgentKind::Llm),
            "tool" => Ok(AgentKind::Tool),
            "compute" => Ok(AgentKind::Compute),
            other => Err(format!("unknown agent type '{}'", other)),
        }
    }
}

/// Operational status. Unknown values are kept, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentStatus {
    Active,
    Inactive,
    Other(String),
}

impl AgentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
            AgentStatus::Other(s) => s,
        }
    }
}

impl From<String> for AgentStatus {
    fn from(s: String) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "active" => AgentStatus::Active,
            "inactive" => AgentStatus::Inactive,
            _ => AgentStatus::Other(normalized),
        }
    }
}

impl From<AgentStatus> for String {
    fn from(status: AgentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("status must not be empty".to_string());
        }
        Ok(AgentStatus::from(s.to_string()))
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement tier used by the topology layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentLayer {
    Cloud,
    #[default]
    Edge,
    #[serde(alias = "end")]
    Terminal,
}

impl AgentLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentLayer::Cloud => "cloud",
            AgentLayer::Edge => "edge",
            AgentLayer::Terminal => "terminal",
        }
    }
}

impl fmt::Display for AgentLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cloud" => Ok(AgentLayer::Cloud),
            "edge" => Ok(AgentLayer::Edge),
            "terminal" | "end" => Ok(AgentLayer::Terminal),
            other => Err(format!("unknown layer '{}'", other)),
        }
    }
}

/// Processing and memory load, both percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub cpu: u8,
    pub memory: u8,
}

/// One addressable entity in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AgentKind,
    pub status: AgentStatus,
    pub layer: AgentLayer,
    #[serde(flatten)]
    pub resource_usage: ResourceUsage,
    pub capabilities: Vec<String>,
    pub description: String,
    #[serde(rename = "relevance")]
    pub base_relevance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl AgentRecord {
    /// Parse one untyped staged value into a record, rejecting partial shapes.
    pub fn from_staged(value: serde_json::Value) -> Result<Self, DiscoveryError> {
        let staged: StagedRecord = serde_json::from_value(value)
            .map_err(|e| DiscoveryError::InvalidRecord(e.to_string()))?;
        AgentRecord::try_from(staged)
    }
}

/// Loosely-typed shape of a record as written by the registration flow.
#[derive(Debug, Deserialize)]
struct StagedRecord {
    id: Option<String>,
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    status: Option<String>,
    layer: Option<String>,
    cpu: Option<i64>,
    memory: Option<i64>,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    description: String,
    relevance: Option<i64>,
    endpoint: Option<String>,
}

fn required(field: Option<String>, name: &str) -> Result<String, DiscoveryError> {
    match field {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DiscoveryError::InvalidRecord(format!(
            "missing required field '{}'",
            name
        ))),
    }
}

fn percentage(value: Option<i64>, name: &str) -> Result<u8, DiscoveryError> {
    match value {
        None => Ok(0),
        Some(v) if (0..=100).contains(&v) => Ok(v as u8),
        Some(v) => Err(DiscoveryError::InvalidRecord(format!(
            "'{}' out of range 0-100: {}",
            name, v
        ))),
    }
}

impl TryFrom<StagedRecord> for AgentRecord {
    type Error = DiscoveryError;

    fn try_from(staged: StagedRecord) -> Result<Self, Self::Error> {
        let id = required(staged.id, "id")?;
        if !AGENT_ID.is_match(&id) {
            return Err(DiscoveryError::InvalidRecord(format!(
                "id '{}' contains unsupported characters",
                id
            )));
        }
        let name = required(staged.name, "name")?;
        let kind = required(staged.kind, "type")?
            .parse::<AgentKind>()
            .map_err(DiscoveryError::InvalidRecord)?;
        let layer = match staged.layer {
            Some(l) if !l.trim().is_empty() => {
                l.parse::<AgentLayer>().map_err(DiscoveryError::InvalidRecord)?
            }
            _ => AgentLayer::default(),
        };
        let status = staged
            .status
            .filter(|s| !s.trim().is_empty())
            .map(AgentStatus::from)
            .unwrap_or(AgentStatus::Active);
        let resource_usage = ResourceUsage {
            cpu: percentage(staged.cpu, "cpu")?,
            memory: percentage(staged.memory, "memory")?,
        };
        let base_relevance = percentage(staged.relevance, "relevance")?;

        Ok(AgentRecord {
            id,
            name,
            kind,
            status,
            layer,
            resource_usage,
            capabilities: staged.capabilities,
            description: staged.description,
            base_relevance: staged
                .relevance
                .map(|_| base_relevance as u32)
                .unwrap_or(DEFAULT_BASE_RELEVANCE),
            endpoint: staged.endpoint.filter(|e| !e.trim().is_empty()),
        })
    }
}

/// A record plus its score for one ranking pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAgent {
    pub record: AgentRecord,
    pub match_score: u32,
}

impl ScoredAgent {
    pub fn display_score(&self) -> u32 {
        self.match_score.min(100)
    }
}

/// One row of the discovery list
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryEntry {
    Record(AgentRecord),
    Scored(ScoredAgent),
}

impl DiscoveryEntry {
    pub fn record(&self) -> &AgentRecord {
        match self {
            DiscoveryEntry::Record(r) => r,
            DiscoveryEntry::Scored(s) => &s.record,
        }
    }

    pub fn match_score(&self) -> Option<u32> {
        match self {
            DiscoveryEntry::Record(_) => None,
            DiscoveryEntry::Scored(s) => Some(s.match_score),
        }
    }

    /// Percentage shown next to the entry, capped at 100
    pub fn display_score(&self) -> u32 {
        match self {
            DiscoveryEntry::Record(r) => r.base_relevance.min(100),
            DiscoveryEntry::Scored(s) => s.display_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_uses_wire_field_names() {
        let record = AgentRecord {
            id: "tool-db".to_string(),
            name: "Database".to_string(),
            kind: AgentKind::Tool,
            status: AgentStatus::Active,
            layer: AgentLayer::Cloud,
            resource_usage: ResourceUsage { cpu: 35, memory: 42 },
            capabilities: vec!["queries".to_string()],
            description: "Storage".to_string(),
            base_relevance: 78,
            endpoint: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "tool");
        assert_eq!(value["cpu"], 35);
        assert_eq!(value["relevance"], 78);
        assert!(value.get("endpoint").is_none());
    }

    #[test]
    fn test_staged_record_defaults() {
        let record = AgentRecord::from_staged(json!({
            "id": "agent-1700000000000",
            "name": "Drone",
            "type": "agent",
            "capabilities": ["aerial video"],
            "description": "Flies"
        }))
        .unwrap();

        assert_eq!(record.status, AgentStatus::Active);
        assert_eq!(record.layer, AgentLayer::Edge);
        assert_eq!(record.base_relevance, DEFAULT_BASE_RELEVANCE);
        assert_eq!(record.resource_usage, ResourceUsage::default());
    }

    #[test]
    fn test_staged_record_accepts_end_layer() {
        let record = AgentRecord::from_staged(json!({
            "id": "cam-1", "name": "Cam", "type": "tool", "layer": "end"
        }))
        .unwrap();
        assert_eq!(record.layer, AgentLayer::Terminal);
    }

    #[test]
    fn test_staged_record_rejects_partial_shapes() {
        assert!(AgentRecord::from_staged(json!({"name": "No id", "type": "agent"})).is_err());
        assert!(AgentRecord::from_staged(json!({"id": "x", "name": "X", "type": "robot"})).is_err());
        assert!(AgentRecord::from_staged(json!({"id": "x", "name": "X", "type": "agent", "cpu": 140})).is_err());
        assert!(AgentRecord::from_staged(json!({"id": "bad id", "name": "X", "type": "agent"})).is_err());
        assert!(AgentRecord::from_staged(json!("just a string")).is_err());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = AgentStatus::from("maintenance".to_string());
        assert_eq!(status, AgentStatus::Other("maintenance".to_string()));
        assert_eq!(status.to_string(), "maintenance");
        assert_eq!("Active".parse::<AgentStatus>().unwrap(), AgentStatus::Active);
    }

    #[test]
    fn test_unknown_status_ignores_case() {
        let staged = AgentRecord::from_staged(json!({
            "id": "agent-sat",
            "name": "Sat",
            "type": "agent",
            "status": " Maintenance "
        }))
        .unwrap();
        let filter: AgentStatus = "maintenance".parse().unwrap();
        assert_eq!(staged.status, filter);
        assert_eq!(staged.status.as_str(), "maintenance");
    }

    #[test]
    fn test_display_score_is_capped() {
        let record = AgentRecord::from_staged(json!({
            "id": "a", "name": "A", "type": "agent", "relevance": 90
        }))
        .unwrap();
        let scored = DiscoveryEntry::Scored(ScoredAgent {
            record: record.clone(),
            match_score: 129,
        });
        assert_eq!(scored.display_score(), 100);
        assert_eq!(DiscoveryEntry::Record(record).display_score(), 90);
    }
}
