use std::time::Duration;

pub const DEFAULT_MARKET_TTL_SECS: u64 = 300;
pub const DEFAULT_NEWS_TTL_SECS: u64 = 1800;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cmc_api_key: Option<String>,
    pub cmc_base_url: Option<String>,
    pub news_api_key: Option<String>,
    pub news_base_url: Option<String>,
    pub market_ttl: Duration,
    pub news_ttl: Duration,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cmc_api_key: None,
            cmc_base_url: None,
            news_api_key: None,
            news_base_url: None,
            market_ttl: Duration::from_secs(DEFAULT_MARKET_TTL_SECS),
            news_ttl: Duration::from_secs(DEFAULT_NEWS_TTL_SECS),
            log_json: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secs = |key: &str, default: u64| {
            Duration::from_secs(non_empty(key).and_then(|v| v.parse().ok()).unwrap_or(default))
        };

        Self {
            cmc_api_key: non_empty("WEB3PULSE_CMC_API_KEY"),
            cmc_base_url: non_empty("WEB3PULSE_CMC_BASE_URL"),
            news_api_key: non_empty("NEWS_API_KEY"),
            news_base_url: non_empty("WEB3PULSE_NEWS_BASE_URL"),
            market_ttl: secs("WEB3PULSE_MARKET_TTL_SECS", DEFAULT_MARKET_TTL_SECS),
            news_ttl: secs("WEB3PULSE_NEWS_TTL_SECS", DEFAULT_NEWS_TTL_SECS),
            log_json: non_empty("WEB3PULSE_LOG_JSON")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
