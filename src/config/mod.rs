mod settings;

pub use settings::{AssistantConfig, LoggingConfig, RelevanceConfig, Settings, StorageConfig};
