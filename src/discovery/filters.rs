//! Filter Composer
//!
//! Combines the type selector, the status selector and, when a query is
//! active, the relevance ranking into the list the view displays.

use crate::catalog::{AgentCatalog, AgentKind, AgentRecord, AgentStatus, DiscoveryEntry};
use crate::relevance::RelevanceEngine;
use serde::{Deserialize, Serialize};

/// Current discovery filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub type_filter: Option<AgentKind>,
    pub status_filter: Option<AgentStatus>,
    pub active_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            type_filter: None,
            status_filter: Some(AgentStatus::Active),
            active_query: String::new(),
        }
    }
}

impl FilterState {
    /// No filters and no query
    pub fn unfiltered() -> Self {
        Self {
            type_filter: None,
            status_filter: None,
            active_query: String::new(),
        }
    }

    pub fn with_type(mut self, kind: Option<AgentKind>) -> Self {
        self.type_filter = kind;
        self
    }

    pub fn with_status(mut self, status: Option<AgentStatus>) -> Self {
        self.status_filter = status;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.active_query = query.into();
        self
    }

    pub fn has_query(&self) -> bool {
        !self.active_query.trim().is_empty()
    }

    /// Whether a record passes the type and status selectors
    pub fn admits(&self, record: &AgentRecord) -> bool {
        if let Some(kind) = self.type_filter {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(status) = &self.status_filter {
            if &record.status != status {
                return false;
            }
        }
        true
    }
}

/// Produce the displayed list for the given filters.
///
/// Without a query the catalog order is kept. With one, the whole catalog is
/// ranked first and the selectors only remove entries from that order.
pub fn apply_filters(
    catalog: &AgentCatalog,
    state: &FilterState,
    engine: &mut RelevanceEngine,
) -> Vec<DiscoveryEntry> {
    if state.has_query() {
        return engine
            .rank(state.active_query.trim(), catalog.records())
            .into_iter()
            .filter(|scored| state.admits(&scored.record))
            .map(DiscoveryEntry::Scored)
            .collect();
    }

    catalog
        .iter()
        .filter(|record| state.admits(record))
        .cloned()
        .map(DiscoveryEntry::Record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AgentLayer;
    use crate::config::RelevanceConfig;
    use crate::relevance::random::FixedRandom;

    fn engine() -> RelevanceEngine {
        RelevanceEngine::deterministic(RelevanceConfig::default())
    }

    fn catalog_with_inactive_llm() -> AgentCatalog {
        let mut catalog = AgentCatalog::with_seed();
        let mut offline = catalog.get("llm-gpt").unwrap().clone();
        offline.id = "llm-offline".to_string();
        offline.name = "Offline LLM".to_string();
        offline.status = AgentStatus::Inactive;
        offline.layer = AgentLayer::Cloud;
        catalog.insert(offline);
        catalog
    }

    fn ids(entries: &[DiscoveryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.record().id.as_str()).collect()
    }

    #[test]
    fn test_default_state_shows_active_only() {
        let catalog = catalog_with_inactive_llm();
        let entries = apply_filters(&catalog, &FilterState::default(), &mut engine());

        assert_eq!(entries.len(), 8);
        assert!(!ids(&entries).contains(&"llm-offline"));
        assert!(entries.iter().all(|e| e.match_score().is_none()));
    }

    #[test]
    fn test_type_and_status_without_query() {
        let catalog = catalog_with_inactive_llm();
        let state = FilterState::default().with_type(Some(AgentKind::Llm));
        let entries = apply_filters(&catalog, &state, &mut engine());

        let expected: Vec<&str> = catalog
            .iter()
            .filter(|r| r.kind == AgentKind::Llm && r.status == AgentStatus::Active)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids(&entries), expected);
        assert_eq!(ids(&entries), vec!["llm-gpt"]);
    }

    #[test]
    fn test_unfiltered_keeps_catalog_order() {
        let catalog = catalog_with_inactive_llm();
        let entries = apply_filters(&catalog, &FilterState::unfiltered(), &mut engine());
        let expected: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids(&entries), expected);
    }

    #[test]
    fn test_idempotent_without_query() {
        let catalog = catalog_with_inactive_llm();
        let state = FilterState::default().with_type(Some(AgentKind::Agent));
        let once = apply_filters(&catalog, &state, &mut engine());

        let mut reduced = AgentCatalog::new();
        for entry in &once {
            reduced.insert(entry.record().clone());
        }
        let twice = apply_filters(&reduced, &state, &mut engine());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_order_wins_over_catalog_order() {
        let catalog = AgentCatalog::with_seed();
        let state = FilterState::unfiltered().with_query("report generation");
        let entries = apply_filters(&catalog, &state, &mut engine());

        assert_eq!(entries[0].record().id, "agent-report");
        let scores: Vec<u32> = entries.iter().filter_map(|e| e.match_score()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_query_results_are_filtered_after_ranking() {
        let catalog = catalog_with_inactive_llm();
        let state = FilterState::default()
            .with_type(Some(AgentKind::Llm))
            .with_query("text generation");
        let entries = apply_filters(&catalog, &state, &mut engine());

        assert_eq!(ids(&entries), vec!["llm-gpt"]);
    }

    #[test]
    fn test_query_ranks_full_catalog_under_floor() {
        let catalog = catalog_with_inactive_llm();
        let mut floored = RelevanceEngine::deterministic(RelevanceConfig::default())
            .with_random_source(FixedRandom(30));
        let state = FilterState::unfiltered().with_query("weather climate");
        let entries = apply_filters(&catalog, &state, &mut floored);

        assert_eq!(entries.len(), catalog.len());
        assert_eq!(entries[0].record().id, "agent-meteorology");
    }

    #[test]
    fn test_inactive_status_filter() {
        let catalog = catalog_with_inactive_llm();
        let state = FilterState::unfiltered().with_status(Some(AgentStatus::Inactive));
        let entries = apply_filters(&catalog, &state, &mut engine());
        assert_eq!(ids(&entries), vec!["llm-offline"]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let catalog = AgentCatalog::with_seed();
        let state = FilterState::default().with_query("   ");
        let entries = apply_filters(&catalog, &state, &mut engine());
        assert_eq!(entries.len(), catalog.len());
        assert!(entries[0].match_score().is_none());
    }
}
