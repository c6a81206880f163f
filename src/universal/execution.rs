use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::entity::{PrimaryAssets, SmartAccountOptions, SwapReceipt, SwapTransaction};
use crate::universal::models::{
    ConvertBody, ConvertRequest, RootHashField, SendBody, SendResponse, TradeConfig,
};
use crate::universal::UniversalConfig;

/// Universal Account execution service. Builds and settles cross-chain
/// transactions on behalf of an owner address.
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Builds an unsigned transaction and returns it with its root hash.
    async fn create_convert_transaction(
        &self,
        owner: &str,
        request: &ConvertRequest,
    ) -> Result<SwapTransaction>;

    /// Submits a built transaction together with the owner's signature.
    async fn send_transaction(
        &self,
        owner: &str,
        transaction: &SwapTransaction,
        signature: &str,
    ) -> Result<SwapReceipt>;

    /// Holdings aggregated across every supported chain.
    async fn get_primary_assets(&self, owner: &str) -> Result<PrimaryAssets>;

    /// Smart account addresses behind the owner.
    async fn get_smart_account_options(&self, owner: &str) -> Result<SmartAccountOptions>;
}

/// Execution service reached over its HTTP bridge
pub struct HttpExecutionService {
    http_client: Client,
    config: UniversalConfig,
}

impl HttpExecutionService {
    pub fn new(config: UniversalConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn account_url(&self, owner: &str, path: &str) -> String {
        format!(
            "{}/accounts/{}/{}",
            self.config.service_url.trim_end_matches('/'),
            owner,
            path
        )
    }

    fn with_project(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.project_id {
            Some(project_id) => request.header("X-Project-Id", project_id),
            None => request,
        }
    }

    async fn send_json<D>(&self, request: RequestBuilder, what: &str) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let response = self
            .with_project(request)
            .send()
            .await
            .map_err(|e| anyhow!("{} request failed: {}", what, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("{} failed with {}: {}", what, status, error_text));
        }

        response
            .json::<D>()
            .await
            .map_err(|e| anyhow!("Failed to parse {} response: {}", what, e))
    }
}

#[async_trait]
impl ExecutionService for HttpExecutionService {
    async fn create_convert_transaction(
        &self,
        owner: &str,
        request: &ConvertRequest,
    ) -> Result<SwapTransaction> {
        let body = ConvertBody {
            request,
            trade_config: TradeConfig {
                slippage_bps: self.config.slippage_bps,
                universal_gas: self.config.universal_gas,
            },
        };

        debug!("Requesting convert transaction: {:?}", body);

        let descriptor: serde_json::Value = self
            .send_json(
                self.http_client
                    .post(self.account_url(owner, "convert-transactions"))
                    .json(&body),
                "Convert transaction",
            )
            .await?;

        let RootHashField { root_hash } = serde_json::from_value(descriptor.clone())
            .map_err(|e| anyhow!("Convert transaction has no root hash: {}", e))?;

        info!("Convert transaction created with root hash {}", root_hash);

        Ok(SwapTransaction {
            root_hash,
            descriptor,
        })
    }

    async fn send_transaction(
        &self,
        owner: &str,
        transaction: &SwapTransaction,
        signature: &str,
    ) -> Result<SwapReceipt> {
        let body = SendBody {
            transaction: &transaction.descriptor,
            signature,
        };

        let SendResponse { transaction_id } = self
            .send_json(
                self.http_client
                    .post(self.account_url(owner, "transactions"))
                    .json(&body),
                "Send transaction",
            )
            .await?;

        Ok(SwapReceipt { transaction_id })
    }

    async fn get_primary_assets(&self, owner: &str) -> Result<PrimaryAssets> {
        self.send_json(
            self.http_client.get(self.account_url(owner, "primary-assets")),
            "Primary assets",
        )
        .await
    }

    async fn get_smart_account_options(&self, owner: &str) -> Result<SmartAccountOptions> {
        self.send_json(
            self.http_client
                .get(self.account_url(owner, "smart-account-options")),
            "Smart account options",
        )
        .await
    }
}
