use std::env;
use std::time::Duration;

pub const DEFAULT_DIA_API_URL: &str = "https://api.diadata.org/v1";
pub const DEFAULT_MORALIS_API_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Price oracle configuration
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Base URL of the primary quotation API
    pub dia_api_url: String,

    /// Base URL of the secondary ERC-20 price API
    pub moralis_api_url: String,

    /// API key for the secondary source; requests are skipped without it
    pub moralis_api_key: Option<String>,

    /// How long a fetched quote is served without re-fetching
    pub revalidate_after: Duration,

    /// Timeout for every upstream request
    pub http_timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            dia_api_url: DEFAULT_DIA_API_URL.to_string(),
            moralis_api_url: DEFAULT_MORALIS_API_URL.to_string(),
            moralis_api_key: None,
            revalidate_after: Duration::from_secs(300),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl OracleConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            dia_api_url: env::var("DIA_API_URL").unwrap_or(defaults.dia_api_url),
            moralis_api_url: env::var("MORALIS_API_URL").unwrap_or(defaults.moralis_api_url),
            moralis_api_key: env::var("MORALIS_API_KEY").ok().filter(|k| !k.is_empty()),
            revalidate_after: env::var("PRICE_REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.revalidate_after),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }
}
