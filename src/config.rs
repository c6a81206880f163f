use std::env;
use std::time::Duration;

use crate::oracle::routes::PARTI_BSC_ADDRESS;
use crate::oracle::OracleConfig;
use crate::universal::UniversalConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the host HTTP server binds to
    pub listen_addr: String,

    /// JSON-RPC endpoint used for the extra token balance
    pub balance_rpc_url: String,

    /// Catalog id of the token read directly on chain
    pub extra_token_id: String,

    /// Contract address of that token
    pub extra_token_address: String,

    /// Decimal precision of that token
    pub extra_token_decimals: u8,

    /// Period of the background price refresh
    pub price_refresh_interval: Duration,

    pub oracle: OracleConfig,
    pub universal: UniversalConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            balance_rpc_url: "https://binance.llamarpc.com".to_string(),
            extra_token_id: "parti".to_string(),
            extra_token_address: PARTI_BSC_ADDRESS.to_string(),
            extra_token_decimals: 18,
            price_refresh_interval: Duration::from_secs(300),
            oracle: OracleConfig::default(),
            universal: UniversalConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            balance_rpc_url: env::var("BALANCE_RPC_URL").unwrap_or(defaults.balance_rpc_url),
            extra_token_id: env::var("EXTRA_TOKEN_ID").unwrap_or(defaults.extra_token_id),
            extra_token_address: env::var("EXTRA_TOKEN_ADDRESS")
                .unwrap_or(defaults.extra_token_address),
            extra_token_decimals: env::var("EXTRA_TOKEN_DECIMALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.extra_token_decimals),
            price_refresh_interval: parse_refresh_interval(
                env::var("PRICE_REFRESH_INTERVAL_SECS").ok().as_deref(),
                defaults.price_refresh_interval,
            ),
            oracle: OracleConfig::from_env(),
            universal: UniversalConfig::from_env(),
        }
    }
}

/// Refresh period in whole seconds, never shorter than one second.
fn parse_refresh_interval(raw: Option<&str>, default: Duration) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs.max(1)))
        .unwrap_or(default)
}
