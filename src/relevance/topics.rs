//! Topical boosts
//!
//! A boost fires when the query mentions any trigger word and the record
//! advertises a capability containing the topic marker. Families are
//! independent; several may fire for one record.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicBoost {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub marker: &'static str,
    pub bonus: u32,
}

pub const TOPIC_BOOSTS: &[TopicBoost] = &[
    TopicBoost {
        name: "video",
        triggers: &["video", "analyze", "analysis"],
        marker: "video",
        bonus: 20,
    },
    TopicBoost {
        name: "report",
        triggers: &["report", "generate", "summary"],
        marker: "report",
        bonus: 20,
    },
    TopicBoost {
        name: "data-processing",
        triggers: &["process", "data", "processing"],
        marker: "process",
        bonus: 15,
    },
];

impl TopicBoost {
    /// Bonus earned given lowercased keywords and lowercased capabilities
    pub fn bonus_for(&self, keywords: &[String], capabilities: &[String]) -> u32 {
        let triggered = keywords
            .iter()
            .any(|k| self.triggers.iter().any(|t| *t == k.as_str()));
        if triggered && capabilities.iter().any(|c| c.contains(self.marker)) {
            self.bonus
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_video_boost_needs_trigger_and_marker() {
        let video = &TOPIC_BOOSTS[0];
        let caps = strings(&["video analysis"]);
        assert_eq!(video.bonus_for(&strings(&["analyze"]), &caps), 20);
        assert_eq!(video.bonus_for(&strings(&["weather"]), &caps), 0);
        assert_eq!(video.bonus_for(&strings(&["video"]), &strings(&["maps"])), 0);
    }

    #[test]
    fn test_trigger_must_be_whole_keyword() {
        let report = &TOPIC_BOOSTS[1];
        let caps = strings(&["report generation"]);
        assert_eq!(report.bonus_for(&strings(&["reports"]), &caps), 0);
        assert_eq!(report.bonus_for(&strings(&["summary"]), &caps), 20);
    }

    #[test]
    fn test_processing_boost_weight() {
        let processing = &TOPIC_BOOSTS[2];
        let caps = strings(&["batch processing"]);
        assert_eq!(processing.bonus_for(&strings(&["data"]), &caps), 15);
    }
}
