//! Relevance Engine
//!
//! Information Hiding:
//! - Keyword extraction and weighting rules hidden behind `score` and `rank`
//! - Randomness injected through `RandomSource`; the engine never reaches for a global RNG
//! - Catalog records are only read; scored results are fresh copies

pub mod random;
pub mod topics;

use crate::catalog::{AgentRecord, ScoredAgent};
use crate::config::RelevanceConfig;
use random::{RandomSource, ThreadRandom};
use topics::{TopicBoost, TOPIC_BOOSTS};

/// Lowercased whitespace-separated keywords, duplicates removed, first occurrence kept.
pub fn keywords(query: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in query.to_lowercase().split_whitespace() {
        if !out.iter().any(|k| k == token) {
            out.push(token.to_string());
        }
    }
    out
}

/// Scores agent records against free-text queries
pub struct RelevanceEngine {
    config: RelevanceConfig,
    topics: &'static [TopicBoost],
    floor: Option<Box<dyn RandomSource>>,
}

impl RelevanceEngine {
    /// Engine with the random floor driven by the thread RNG when enabled in config
    pub fn new(config: RelevanceConfig) -> Self {
        let floor: Option<Box<dyn RandomSource>> = if config.liveliness {
            Some(Box::new(ThreadRandom))
        } else {
            None
        };
        Self {
            config,
            topics: TOPIC_BOOSTS,
            floor,
        }
    }

    /// Engine that never applies the random floor
    pub fn deterministic(config: RelevanceConfig) -> Self {
        Self {
            config,
            topics: TOPIC_BOOSTS,
            floor: None,
        }
    }

    /// Replace the floor source
    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.floor = Some(Box::new(source));
        self
    }

    pub fn is_deterministic(&self) -> bool {
        self.floor.is_none()
    }

    pub fn config(&self) -> &RelevanceConfig {
        &self.config
    }

    /// Score without the random floor
    pub fn deterministic_score(&self, query: &str, record: &AgentRecord) -> u32 {
        self.score_keywords(&keywords(query), record)
    }

    /// Score including the random floor, if one is configured
    pub fn score(&mut self, query: &str, record: &AgentRecord) -> u32 {
        let base = self.deterministic_score(query, record);
        self.apply_floor(base)
    }

    /// Score every record, drop those at or below the threshold, best first.
    ///
    /// Ties keep catalog order.
    pub fn rank(&mut self, query: &str, records: &[AgentRecord]) -> Vec<ScoredAgent> {
        let keywords = keywords(query);
        let mut ranked: Vec<ScoredAgent> = Vec::with_capacity(records.len());

        for record in records {
            let base = self.score_keywords(&keywords, record);
            let match_score = self.apply_floor(base);
            if match_score > self.config.min_score {
                ranked.push(ScoredAgent {
                    record: record.clone(),
                    match_score,
                });
            }
        }

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "[RelevanceEngine] Ranked {} of {} records for {:?}",
            ranked.len(),
            records.len(),
            query
        );
        ranked
    }

    fn apply_floor(&mut self, base: u32) -> u32 {
        match self.floor.as_mut() {
            Some(source) => base.max(source.next_int(self.config.floor_min, self.config.floor_max)),
            None => base,
        }
    }

    fn score_keywords(&self, keywords: &[String], record: &AgentRecord) -> u32 {
        if keywords.is_empty() {
            return 0;
        }

        let capabilities: Vec<String> = record
            .capabilities
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        let haystack = format!(
            "{} {} {}",
            record.name.to_lowercase(),
            record.description.to_lowercase(),
            capabilities.join(" ")
        );

        let mut score: u32 = 0;
        for keyword in keywords {
            if haystack.contains(keyword.as_str()) {
                score = score.saturating_add(self.config.keyword_weight);
            }
        }

        for capability in &capabilities {
            for keyword in keywords {
                if capability.contains(keyword.as_str()) {
                    score = score.saturating_add(self.config.capability_weight);
                }
            }
        }

        for topic in self.topics {
            score = score.saturating_add(topic.bonus_for(keywords, &capabilities));
        }

        score
    }
}
