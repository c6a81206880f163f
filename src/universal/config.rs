use std::env;
use std::time::Duration;

/// Connection settings for the Universal Account execution service and the wallet bridge
#[derive(Debug, Clone)]
pub struct UniversalConfig {
    pub service_url: String,
    pub project_id: Option<String>,
    pub slippage_bps: u32,
    pub universal_gas: bool,
    pub signer_url: String,
    pub signature_timeout: Duration,
    pub http_timeout: Duration,
}

impl Default for UniversalConfig {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8787".to_string(),
            project_id: None,
            slippage_bps: 100,
            universal_gas: true,
            signer_url: "http://127.0.0.1:8788".to_string(),
            signature_timeout: Duration::from_secs(120),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl UniversalConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_url: env::var("UA_SERVICE_URL").unwrap_or(defaults.service_url),
            project_id: env::var("UA_PROJECT_ID").ok().filter(|v| !v.is_empty()),
            slippage_bps: env::var("UA_SLIPPAGE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.slippage_bps),
            universal_gas: env::var("UA_UNIVERSAL_GAS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.universal_gas),
            signer_url: env::var("WALLET_SIGNER_URL").unwrap_or(defaults.signer_url),
            signature_timeout: env::var("SIGNATURE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.signature_timeout),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }
}
