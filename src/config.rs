use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name (development, production, ...)
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// Path to the SQLite film database
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Base URL of the external reviews API
    #[serde(default = "default_reviews_api_url")]
    pub reviews_api_url: String,

    /// Request timeout for the reviews API, in seconds
    #[serde(default = "default_reviews_timeout_secs")]
    pub reviews_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_db_path() -> String {
    "./db/database.db".to_string()
}

fn default_reviews_api_url() -> String {
    "https://credentials-api.generalassemb.ly/4576f55f-c427-4cfc-a11c-5bfe914ca6c1".to_string()
}

fn default_reviews_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "debug"
        } else {
            "info"
        }
    }

    pub fn reviews_timeout(&self) -> Duration {
        Duration::from_secs(self.reviews_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
