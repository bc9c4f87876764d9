use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Literal key value meaning "no Spoonacular key configured"
pub const UNCONFIGURED_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Spoonacular API key
    #[serde(default = "default_spoonacular_api_key")]
    pub spoonacular_api_key: String,

    /// Spoonacular recipes API base URL
    #[serde(default = "default_spoonacular_api_url")]
    pub spoonacular_api_url: String,

    /// Timeout applied to each outbound Spoonacular call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bundled recipe dataset used when the API is unavailable
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode lowers the default log level to `debug`
    #[serde(default)]
    pub debug: bool,

    /// Fixed seed for landing page recommendations
    #[serde(default)]
    pub recommendation_seed: Option<u64>,
}

fn default_spoonacular_api_key() -> String {
    UNCONFIGURED_API_KEY.to_string()
}

fn default_spoonacular_api_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/local_recipes.json")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing directive when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "recipe_finder=debug,tower_http=debug"
        } else {
            "recipe_finder=info,tower_http=info"
        }
    }
}
