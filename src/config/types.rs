use crate::media::MediaConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

/// Where the StyleMind backend lives and how long each stage may take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_analyze_timeout_secs")]
    pub analyze_timeout_secs: u64,
    /// Image description plus drafting routinely takes one to two minutes.
    #[serde(default = "default_generate_timeout_secs")]
    pub generate_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_analyze_timeout_secs() -> u64 {
    120
}

fn default_generate_timeout_secs() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            analyze_timeout_secs: default_analyze_timeout_secs(),
            generate_timeout_secs: default_generate_timeout_secs(),
        }
    }
}
