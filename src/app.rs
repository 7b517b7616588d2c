//! Discovery Application Controller
//!
//! Information Hiding:
//! - Owns the catalog, filter state, selection and relevance engine
//! - Views call into the controller and render whatever list it hands back
//! - Engine and composer stay pure; this is the only place state changes

use crate::assistant;
use crate::catalog::merge::{merge_staged, MergeReport};
use crate::catalog::{AgentCatalog, AgentKind, AgentRecord, AgentStatus, CatalogStats, DiscoveryEntry};
use crate::config::Settings;
use crate::discovery::{apply_filters, FilterState, SelectionSet};
use crate::error::DiscoveryError;
use crate::relevance::RelevanceEngine;
use crate::storage::StagingStorage;
use crate::topology::TopologyGraph;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Reply to one submitted chat message
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub reply: String,
    pub results: Vec<DiscoveryEntry>,
}

pub struct DiscoveryApp {
    catalog: AgentCatalog,
    filters: FilterState,
    selection: SelectionSet,
    engine: RelevanceEngine,
    messages: Vec<ChatMessage>,
}

impl DiscoveryApp {
    pub fn new(catalog: AgentCatalog, engine: RelevanceEngine) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            selection: SelectionSet::new(),
            engine,
            messages: Vec::new(),
        }
    }

    /// Seed catalog with the engine configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            AgentCatalog::with_seed(),
            RelevanceEngine::new(settings.relevance.clone()),
        )
    }

    /// Merge records staged by the registration flow
    pub async fn load_staged(&mut self, storage: &dyn StagingStorage, key: &str) -> Result<MergeReport> {
        merge_staged(&mut self.catalog, storage, key).await
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    pub fn topology(&self) -> TopologyGraph {
        TopologyGraph::from_catalog(&self.catalog)
    }

    /// The list as the current filters produce it
    pub fn visible(&mut self) -> Vec<DiscoveryEntry> {
        apply_filters(&self.catalog, &self.filters, &mut self.engine)
    }

    pub fn set_type_filter(&mut self, kind: Option<AgentKind>) -> Vec<DiscoveryEntry> {
        self.filters.type_filter = kind;
        self.visible()
    }

    pub fn set_status_filter(&mut self, status: Option<AgentStatus>) -> Vec<DiscoveryEntry> {
        self.filters.status_filter = status;
        self.visible()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<DiscoveryEntry> {
        self.filters.active_query = query.into();
        self.visible()
    }

    /// Record a chat message, re-run discovery with it as the query and reply.
    ///
    /// Blank input is ignored.
    pub fn submit_chat(&mut self, input: &str) -> Option<ChatTurn> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });

        let results = self.set_query(text);
        let reply = assistant::respond(text, &self.catalog);

        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: reply.clone(),
        });

        tracing::info!("[DiscoveryApp] Query {:?} matched {} agents", text, results.len());
        Some(ChatTurn { reply, results })
    }

    /// Apply a checkbox change for a catalog record
    pub fn toggle_selection(&mut self, id: &str, checked: bool) -> Result<bool, DiscoveryError> {
        if !self.catalog.contains(id) {
            tracing::warn!("[DiscoveryApp] Ignoring selection of unknown agent '{}'", id);
            return Err(DiscoveryError::UnknownAgent {
                agent_id: id.to_string(),
            });
        }
        Ok(self.selection.toggle(id, checked))
    }

    pub fn remove_selection(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    pub fn selected_records(&self) -> Vec<&AgentRecord> {
        self.selection
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }
}
