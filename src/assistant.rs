//! Scripted Orchestrator Assistant
//!
//! Canned replies picked by substring match on the user's message. The first
//! matching topic wins; triggers are checked in table order. Replies that
//! mention catalog contents are computed from the catalog passed in.

use crate::catalog::{AgentCatalog, AgentKind, AgentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTopic {
    Agents,
    Llm,
    Resources,
    Status,
    Video,
    Map,
    Weather,
    Report,
    Default,
}

const RULES: &[(ReplyTopic, &[&str])] = &[
    (ReplyTopic::Agents, &["agent", "代理"]),
    (ReplyTopic::Llm, &["llm", "大模型"]),
    (ReplyTopic::Resources, &["resource", "资源"]),
    (ReplyTopic::Status, &["status", "状态"]),
    (ReplyTopic::Video, &["video", "视频"]),
    (ReplyTopic::Map, &["map", "地图", "位置"]),
    (ReplyTopic::Weather, &["weather", "气象", "天气"]),
    (ReplyTopic::Report, &["report", "报告"]),
];

pub const WELCOME: &str = "Welcome to the IOA platform!\n\
  - Use discovery to search for and select agents\n\
  - Use register to add a new agent\n\
  - Chat here with the Orchestrator Agent";

/// Pick the reply topic for a message
pub fn classify(input: &str) -> ReplyTopic {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ReplyTopic::Default)
}

/// Render the canned reply for a message
pub fn respond(input: &str, catalog: &AgentCatalog) -> String {
    let topic = classify(input);
    tracing::debug!("[Assistant] {:?} -> {:?}", input, topic);

    match topic {
        ReplyTopic::Agents => {
            let agents: Vec<String> = catalog
                .iter()
                .filter(|r| r.kind == AgentKind::Agent)
                .map(|r| format!("{} ({} layer)", r.name, r.layer))
                .collect();
            format!(
                "There are currently {} core agents: {}. They are handling different tasks.",
                agents.len(),
                agents.join(", ")
            )
        }
        ReplyTopic::Llm => {
            let llms: Vec<_> = catalog.iter().filter(|r| r.kind == AgentKind::Llm).collect();
            if llms.is_empty() {
                return "No LLM instances are registered.".to_string();
            }
            let load: u32 = llms.iter().map(|r| r.resource_usage.cpu as u32).sum::<u32>()
                / llms.len() as u32;
            let online = llms.iter().filter(|r| r.status == AgentStatus::Active).count();
            format!(
                "LLM utilization is {}%. {} of {} instances online. Consider rebalancing task assignment to improve efficiency.",
                load,
                online,
                llms.len()
            )
        }
        ReplyTopic::Resources => {
            let series = catalog.resource_series();
            format!(
                "All resources are running normally. Average CPU usage {}%, average memory usage {}%.",
                series.average_cpu(),
                series.average_memory()
            )
        }
        ReplyTopic::Status => {
            let offline = catalog
                .iter()
                .filter(|r| r.status != AgentStatus::Active)
                .count();
            if offline == 0 {
                "System status is good. All nodes are online. 0 faults, 0 warnings detected."
                    .to_string()
            } else {
                format!(
                    "{} of {} nodes are not active. Check the discovery list for details.",
                    offline,
                    catalog.len()
                )
            }
        }
        ReplyTopic::Video => "Recommending video processing agents. VideoAgent handles video analysis and KeyframeAgent extracts key frames.".to_string(),
        ReplyTopic::Map => "Geographic processing needs MapAgent. It specializes in spatial indexing and location processing.".to_string(),
        ReplyTopic::Weather => "Meteorological analysis is handled by MeteorologyAgent. It performs weather analysis and climate prediction.".to_string(),
        ReplyTopic::Report => "Report generation is handled by ReportAgent. It produces comprehensive reports and data visualizations.".to_string(),
        ReplyTopic::Default => "Request received. Relevant agents have been recommended in the discovery list.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        // "agent" is checked before "video"
        assert_eq!(classify("find a video agent"), ReplyTopic::Agents);
        assert_eq!(classify("analyze VIDEO feeds"), ReplyTopic::Video);
        assert_eq!(classify("show me the map"), ReplyTopic::Map);
    }

    #[test]
    fn test_chinese_triggers() {
        assert_eq!(classify("天气怎么样"), ReplyTopic::Weather);
        assert_eq!(classify("生成报告"), ReplyTopic::Report);
        assert_eq!(classify("资源"), ReplyTopic::Resources);
    }

    #[test]
    fn test_default_reply() {
        assert_eq!(classify("hello there"), ReplyTopic::Default);
        let reply = respond("hello there", &AgentCatalog::with_seed());
        assert!(reply.contains("discovery list"));
    }

    #[test]
    fn test_agent_reply_lists_catalog_agents() {
        let reply = respond("which agents exist?", &AgentCatalog::with_seed());
        assert!(reply.contains("5 core agents"));
        assert!(reply.contains("VideoAgent (terminal layer)"));
        assert!(reply.contains("ReportAgent (cloud layer)"));
    }

    #[test]
    fn test_llm_reply_uses_catalog_load() {
        let reply = respond("LLM usage", &AgentCatalog::with_seed());
        assert!(reply.contains("85%"));
        assert!(reply.contains("1 of 1"));
        assert!(respond("llm", &AgentCatalog::new()).contains("No LLM"));
    }

    #[test]
    fn test_status_reply_all_online() {
        let reply = respond("status?", &AgentCatalog::with_seed());
        assert!(reply.contains("All nodes are online"));
    }
}
