use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            model: default_model(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    /// Override for the completed-books file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}
