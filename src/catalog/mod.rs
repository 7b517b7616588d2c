//! Agent Catalog
//!
//! Information Hiding:
//! - Record storage and id index hidden behind an ordered-collection interface
//! - Insertion order is preserved; it is the default display order
//! - Records are only ever appended, never edited in place

pub mod merge;
pub mod record;
pub mod registration;
mod seed;

pub use record::{
    AgentKind, AgentLayer, AgentRecord, AgentStatus, DiscoveryEntry, ResourceUsage, ScoredAgent,
};

use std::collections::{BTreeMap, HashSet};

/// Ordered in-memory collection of agent records keyed by unique id
#[derive(Debug, Clone, Default)]
pub struct AgentCatalog {
    records: Vec<AgentRecord>,
    ids: HashSet<String>,
}

/// Node counts shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub by_kind: BTreeMap<&'static str, usize>,
}

impl CatalogStats {
    pub fn count(&self, kind: AgentKind) -> usize {
        self.by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }
}

impl AgentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the built-in agents
    pub fn with_seed() -> Self {
        let mut catalog = Self::new();
        for record in seed::seed_records() {
            catalog.insert(record);
        }
        catalog
    }

    /// Append a record unless its id is already taken.
    ///
    /// Returns `false` on collision; the existing record is left untouched.
    pub fn insert(&mut self, record: AgentRecord) -> bool {
        if self.ids.contains(&record.id) {
            tracing::debug!("[AgentCatalog] Ignoring duplicate id '{}'", record.id);
            return false;
        }
        tracing::debug!("[AgentCatalog] Added '{}' ({})", record.id, record.kind);
        self.ids.insert(record.id.clone());
        self.records.push(record);
        true
    }

    pub fn get(&self, id: &str) -> Option<&AgentRecord> {
        if !self.ids.contains(id) {
            return None;
        }
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentRecord> {
        self.records.iter()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut by_kind: BTreeMap<&'static str, usize> =
            AgentKind::ALL.iter().map(|k| (k.as_str(), 0)).collect();
        for record in &self.records {
            *by_kind.entry(record.kind.as_str()).or_insert(0) += 1;
        }
        CatalogStats {
            total: self.records.len(),
            by_kind,
        }
    }

    /// Names with processing and memory series, in catalog order
    pub fn resource_series(&self) -> ResourceSeries {
        ResourceSeries {
            names: self.records.iter().map(|r| r.name.clone()).collect(),
            cpu: self.records.iter().map(|r| r.resource_usage.cpu).collect(),
            memory: self.records.iter().map(|r| r.resource_usage.memory).collect(),
        }
    }
}

/// Input data for the resource usage chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSeries {
    pub names: Vec<String>,
    pub cpu: Vec<u8>,
    pub memory: Vec<u8>,
}

impl ResourceSeries {
    pub fn average_cpu(&self) -> u32 {
        average(&self.cpu)
    }

    pub fn average_memory(&self) -> u32 {
        average(&self.memory)
    }
}

fn average(values: &[u8]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().map(|v| *v as u32).sum();
    (sum as f64 / values.len() as f64).round() as u32
}
