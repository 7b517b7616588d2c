use anyhow::Result;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub relevance: RelevanceConfig,
    pub storage: StorageConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceConfig {
    /// Points for a keyword found anywhere in name, description or capabilities
    pub keyword_weight: u32,
    /// Points per capability tag containing a keyword
    pub capability_weight: u32,
    /// Ranked entries must score strictly above this
    pub min_score: u32,
    /// Inclusive range of the random score floor
    pub floor_min: u32,
    pub floor_max: u32,
    /// Apply the random floor at all
    pub liveliness: bool,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 10,
            capability_weight: 15,
            min_score: 20,
            floor_min: 30,
            floor_max: 129,
            liveliness: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub staging_dir: PathBuf,
    pub staging_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relevance: RelevanceConfig::default(),
            storage: StorageConfig {
                staging_dir: PathBuf::from("./staging"),
                staging_key: crate::storage::STAGED_AGENTS_KEY.to_string(),
            },
            assistant: AssistantConfig { reply_delay_ms: 500 },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        let defaults = Settings::default();

        let config = Config::builder()
            .set_default("relevance.keyword_weight", defaults.relevance.keyword_weight)?
            .set_default("relevance.capability_weight", defaults.relevance.capability_weight)?
            .set_default("relevance.min_score", defaults.relevance.min_score)?
            .set_default("relevance.floor_min", defaults.relevance.floor_min)?
            .set_default("relevance.floor_max", defaults.relevance.floor_max)?
            .set_default("relevance.liveliness", defaults.relevance.liveliness)?
            .set_default(
                "storage.staging_dir",
                defaults.storage.staging_dir.to_string_lossy().to_string(),
            )?
            .set_default("storage.staging_key", defaults.storage.staging_key)?
            .set_default("assistant.reply_delay_ms", defaults.assistant.reply_delay_ms)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(File::with_name(&format!("config/{}", config_env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
