use anyhow::Result;
use std::time::Duration;

/// Nature's Loops channel, the default source of rooms
pub const DEFAULT_CHANNEL_ID: &str = "UC2UhrbIufB22XF9l8OklzGw";
const DEFAULT_ENRICHMENT_TIMEOUT_MS: u64 = 2500;
const DEFAULT_TITLE_CACHE_SECS: u64 = 300;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub youtube_api_key: Option<String>,
    pub channel_id: String,
    pub enrichment_timeout: Duration, // HTTP timeout per title lookup and deadline for the whole fan-out
    pub title_cache_ttl: Duration,
    pub lexicon_path: Option<String>,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_lookup(|key| std::env::var(key).ok())
}

impl Config {
    /// Build a configuration from any key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let enrichment_timeout_ms = parse_number(
            "ENRICHMENT_TIMEOUT_MS",
            non_empty("ENRICHMENT_TIMEOUT_MS"),
            DEFAULT_ENRICHMENT_TIMEOUT_MS,
        )?;
        let title_cache_secs = parse_number(
            "TITLE_CACHE_SECS",
            non_empty("TITLE_CACHE_SECS"),
            DEFAULT_TITLE_CACHE_SECS,
        )?;

        Ok(Config {
            youtube_api_key: non_empty("YOUTUBE_API_KEY"),
            channel_id: non_empty("YOUTUBE_CHANNEL_ID")
                .unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string()),
            enrichment_timeout: Duration::from_millis(enrichment_timeout_ms),
            title_cache_ttl: Duration::from_secs(title_cache_secs),
            lexicon_path: non_empty("MOOD_LEXICON"),
        })
    }
}

fn parse_number(key: &str, value: Option<String>, default: u64) -> Result<u64> {
    match value {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("Invalid value '{}' for {}: {}", raw, key, e)),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            youtube_api_key: None,
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            enrichment_timeout: Duration::from_millis(DEFAULT_ENRICHMENT_TIMEOUT_MS),
            title_cache_ttl: Duration::from_secs(DEFAULT_TITLE_CACHE_SECS),
            lexicon_path: None,
        }
    }
}
