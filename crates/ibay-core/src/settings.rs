use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_LOG_LEVEL, NORMALIZED_TREE_FILE, RAW_TREE_FILE},
    fetch::FetchConfig,
    fs::read_toml_config,
    model::Roots,
};

/// Settings of a scraping run, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
    pub output_dir: PathBuf,
    pub raw_file: String,
    pub normalized_file: String,
    pub fetch: FetchSettings,
    pub roots: Roots,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            output_dir: PathBuf::from("."),
            raw_file: RAW_TREE_FILE.to_owned(),
            normalized_file: NORMALIZED_TREE_FILE.to_owned(),
            fetch: FetchSettings::default(),
            roots: Roots::default(),
        }
    }
}

impl Settings {
    pub async fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        read_toml_config(path).await
    }

    pub fn raw_path(&self) -> PathBuf {
        self.output_dir.join(&self.raw_file)
    }

    pub fn normalized_path(&self) -> PathBuf {
        self.output_dir.join(&self.normalized_file)
    }
}

/// TOML friendly form of [`FetchConfig`], durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub base_url: String,
    pub user_agent: String,
    pub max_attempts: u32,
    pub timeout_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchSettings {
    fn from(config: &FetchConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            max_attempts: config.max_attempts,
            timeout_ms: millis(config.timeout),
            min_delay_ms: millis(config.min_delay),
            max_delay_ms: millis(config.max_delay),
        }
    }
}

impl From<&FetchSettings> for FetchConfig {
    fn from(settings: &FetchSettings) -> Self {
        FetchConfig::builder()
            .base_url(settings.base_url.clone())
            .user_agent(settings.user_agent.clone())
            .max_attempts(settings.max_attempts)
            .timeout(Duration::from_millis(settings.timeout_ms))
            .min_delay(Duration::from_millis(settings.min_delay_ms))
            .max_delay(Duration::from_millis(settings.max_delay_ms))
            .build()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
