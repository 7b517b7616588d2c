//! IOA Discovery - agent discovery core for an Internet of Agents dashboard
//!
//! This library provides the agent catalog, relevance ranking, filter
//! composition and staging-storage merge behind the discovery panel, plus
//! the projections (topology, resources, stats) the dashboard draws from.

pub mod app;
pub mod assistant;
pub mod catalog;
mod config;
pub mod discovery;
pub mod error;
pub mod relevance;
pub mod storage;
pub mod topology;
pub mod utils;

pub mod cli;

pub use app::{ChatTurn, DiscoveryApp};
pub use catalog::{AgentCatalog, AgentKind, AgentLayer, AgentRecord, AgentStatus, DiscoveryEntry, ScoredAgent};
pub use config::{RelevanceConfig, Settings};
pub use discovery::{apply_filters, FilterState, SelectionSet};
pub use error::DiscoveryError;
pub use relevance::random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use relevance::RelevanceEngine;

/// Initialize logging from settings; `RUST_LOG` takes precedence
pub fn init_tracing(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.as_str()));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    tracing::info!("IOA discovery logging initialized at '{}'", settings.logging.level);
}
