use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

use crate::universal::models::{RawMessage, SignMessageRequest, SignMessageResponse};
use crate::universal::UniversalConfig;

/// Connected wallet, able to sign raw messages for its account
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Signs `raw_hash` as a raw message. `Ok(None)` means the user declined.
    async fn sign_message(&self, account: &str, raw_hash: &str) -> Result<Option<String>>;
}

/// Wallet reached over the wallet-connection bridge
pub struct HttpWalletSigner {
    http_client: Client,
    signer_url: String,
}

impl HttpWalletSigner {
    pub fn new(config: &UniversalConfig) -> Result<Self> {
        // The user may take a while to approve, so the signature timeout applies here
        let http_client = Client::builder()
            .timeout(config.signature_timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            signer_url: config.signer_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WalletSigner for HttpWalletSigner {
    async fn sign_message(&self, account: &str, raw_hash: &str) -> Result<Option<String>> {
        let request = SignMessageRequest {
            account,
            message: RawMessage { raw: raw_hash },
        };

        let response = self
            .http_client
            .post(format!("{}/sign-message", self.signer_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Signature request failed: {}", e))?;

        let status = response.status();
        if status.is_client_error() {
            info!("Wallet declined to sign for {} ({})", account, status);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(anyhow!("Wallet bridge returned {}", status));
        }

        let body: SignMessageResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse signature response: {}", e))?;

        match body.signature.filter(|s| !s.is_empty()) {
            Some(signature) => Ok(Some(signature)),
            None => {
                warn!("Wallet returned no signature for {}", account);
                Ok(None)
            }
        }
    }
}
