//! Built-in catalog contents shown before anything is registered

use super::record::{AgentKind, AgentLayer, AgentRecord, AgentStatus, ResourceUsage};

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    kind: AgentKind,
    layer: AgentLayer,
    cpu: u8,
    memory: u8,
    capabilities: &[&str],
    description: &str,
    relevance: u32,
) -> AgentRecord {
    AgentRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        status: AgentStatus::Active,
        layer,
        resource_usage: ResourceUsage { cpu, memory },
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
        base_relevance: relevance,
        endpoint: None,
    }
}

pub fn seed_records() -> Vec<AgentRecord> {
    vec![
        seed(
            "agent-video",
            "VideoAgent",
            AgentKind::Agent,
            AgentLayer::Terminal,
            65,
            72,
            &["video analysis", "object detection", "frame extraction", "real-time streaming"],
            "Terminal-layer agent for video processing and analysis at the edge",
            95,
        ),
        seed(
            "agent-keyframe",
            "KeyframeAgent",
            AgentKind::Agent,
            AgentLayer::Edge,
            48,
            58,
            &["keyframe extraction", "scene detection", "thumbnail generation"],
            "Edge-layer agent for extracting key frames from video streams",
            88,
        ),
        seed(
            "agent-map",
            "MapAgent",
            AgentKind::Agent,
            AgentLayer::Edge,
            52,
            64,
            &["map analysis", "spatial indexing", "location processing"],
            "Edge-layer agent for geographic information processing",
            82,
        ),
        seed(
            "agent-meteorology",
            "MeteorologyAgent",
            AgentKind::Agent,
            AgentLayer::Cloud,
            58,
            68,
            &["weather analysis", "climate prediction", "data integration"],
            "Cloud-layer agent for meteorological data analysis",
            85,
        ),
        seed(
            "agent-report",
            "ReportAgent",
            AgentKind::Agent,
            AgentLayer::Cloud,
            72,
            80,
            &["report generation", "data visualization", "comprehensive analysis", "export formatting"],
            "Cloud-layer agent for generating comprehensive reports from processed data",
            92,
        ),
        seed(
            "llm-gpt",
            "GPT-4 LLM",
            AgentKind::Llm,
            AgentLayer::Cloud,
            85,
            92,
            &["NLP", "text generation", "summarization", "analysis"],
            "Cloud-layer large language model for advanced text processing",
            90,
        ),
        seed(
            "tool-database",
            "Database Service",
            AgentKind::Tool,
            AgentLayer::Cloud,
            35,
            42,
            &["data storage", "queries", "indexing", "transactions"],
            "Cloud-layer database service for persistent data storage",
            78,
        ),
        seed(
            "compute-gpu",
            "GPU Cluster",
            AgentKind::Compute,
            AgentLayer::Cloud,
            92,
            96,
            &["deep learning", "inference", "batch processing", "training"],
            "Cloud-layer GPU cluster for heavy computation tasks",
            88,
        ),
    ]
}
