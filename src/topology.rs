//! Network Topology Projection
//!
//! Lays catalog records out as a three-tier graph (cloud on top, edge in the
//! middle, terminal at the bottom) and links edge agents to cloud model and
//! compute resources. Only data is produced; drawing is left to the viewer.

use crate::catalog::{AgentCatalog, AgentKind, AgentLayer, AgentRecord};

const NODE_SPACING: f64 = 150.0;

fn layer_y(layer: AgentLayer) -> f64 {
    match layer {
        AgentLayer::Cloud => -300.0,
        AgentLayer::Edge => 0.0,
        AgentLayer::Terminal => 300.0,
    }
}

fn node_size(kind: AgentKind) -> u32 {
    match kind {
        AgentKind::Agent => 40,
        AgentKind::Llm => 38,
        AgentKind::Tool => 32,
        AgentKind::Compute => 42,
    }
}

/// Legend color for a node kind
pub fn node_color(kind: AgentKind) -> &'static str {
    match kind {
        AgentKind::Agent => "#34a853",
        AgentKind::Llm => "#ea4335",
        AgentKind::Tool => "#fbbc04",
        AgentKind::Compute => "#4285f4",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopologyNode {
    pub id: String,
    pub label: String,
    pub kind: AgentKind,
    pub layer: AgentLayer,
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub color: &'static str,
    /// Hover text
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyGraph {
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<TopologyEdge>,
}

/// A node together with the edges touching it
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight<'a> {
    pub node: &'a TopologyNode,
    pub edges: Vec<&'a TopologyEdge>,
}

impl TopologyGraph {
    pub fn from_catalog(catalog: &AgentCatalog) -> Self {
        let records = catalog.records();

        let nodes = records
            .iter()
            .map(|record| {
                let peers: Vec<&AgentRecord> =
                    records.iter().filter(|r| r.layer == record.layer).collect();
                let index = peers.iter().position(|r| r.id == record.id).unwrap_or(0);
                let start_x = -((peers.len() as f64 - 1.0) * NODE_SPACING) / 2.0;

                TopologyNode {
                    id: record.id.clone(),
                    label: record.name.clone(),
                    kind: record.kind,
                    layer: record.layer,
                    x: start_x + index as f64 * NODE_SPACING,
                    y: layer_y(record.layer),
                    size: node_size(record.kind),
                    color: node_color(record.kind),
                    title: format!(
                        "{} | Type: {} | Layer: {} | CPU: {}% | Memory: {}%",
                        record.name,
                        record.kind,
                        record.layer,
                        record.resource_usage.cpu,
                        record.resource_usage.memory
                    ),
                }
            })
            .collect();

        let cloud: Vec<&AgentRecord> = records
            .iter()
            .filter(|r| r.layer == AgentLayer::Cloud)
            .collect();
        let mut edges = Vec::new();
        for edge_agent in records.iter().filter(|r| r.layer == AgentLayer::Edge) {
            for (index, resource) in cloud.iter().enumerate() {
                let linked = resource.kind == AgentKind::Llm
                    || (resource.kind == AgentKind::Compute && index % 2 == 0);
                if linked {
                    edges.push(TopologyEdge {
                        from: edge_agent.id.clone(),
                        to: resource.id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            "[Topology] Built graph with {} nodes and {} edges",
            catalog.len(),
            edges.len()
        );
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node and incident edges for a selected id; `None` if the id is unknown
    pub fn highlight(&self, id: &str) -> Option<Highlight<'_>> {
        let Some(node) = self.node(id) else {
            tracing::warn!("[Topology] Cannot highlight unknown node '{}'", id);
            return None;
        };
        let edges = self
            .edges
            .iter()
            .filter(|e| e.from == id || e.to == id)
            .collect();
        Some(Highlight { node, edges })
    }
}
