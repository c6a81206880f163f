use alloy::primitives::utils::format_units;
use alloy::primitives::Address;
use alloy::providers::ProviderBuilder;
use alloy::sol;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use std::str::FromStr;
use std::time::Duration;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract IERC20Balance {
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Reads token balances held by an address
#[async_trait]
pub trait BalanceReader: Send + Sync {
    /// Balance normalized by the token's decimals. `None` means the balance is
    /// unknown, which callers must keep apart from a zero balance.
    async fn get_balance(&self, owner: &str, token_contract: &str) -> Option<f64>;
}

/// ERC-20 `balanceOf` reader against one JSON-RPC endpoint
pub struct Erc20BalanceReader {
    rpc_url: String,
    decimals: u8,
    timeout: Duration,
}

impl Erc20BalanceReader {
    pub fn new(rpc_url: &str, decimals: u8, timeout: Duration) -> Self {
        Self {
            rpc_url: rpc_url.to_string(),
            decimals,
            timeout,
        }
    }

    async fn read_balance(&self, owner: &str, token_contract: &str) -> Result<f64> {
        let owner = Address::from_str(owner).map_err(|e| anyhow!("Invalid owner address: {}", e))?;
        let token = Address::from_str(token_contract)
            .map_err(|e| anyhow!("Invalid token address: {}", e))?;

        let url = self
            .rpc_url
            .parse()
            .map_err(|e| anyhow!("Invalid RPC URL {}: {}", self.rpc_url, e))?;
        let provider = ProviderBuilder::new().connect_http(url);
        let contract = IERC20Balance::new(token, &provider);

        let raw = tokio::time::timeout(self.timeout, contract.balanceOf(owner).call())
            .await
            .context("balanceOf timed out")?
            .context("balanceOf call failed")?;

        debug!("Raw balance of {} for {}: {}", token, owner, raw);

        let formatted = format_units(raw, self.decimals)
            .map_err(|e| anyhow!("Failed to format balance: {}", e))?;

        formatted
            .parse::<f64>()
            .map_err(|e| anyhow!("Failed to parse balance {}: {}", formatted, e))
    }
}

#[async_trait]
impl BalanceReader for Erc20BalanceReader {
    async fn get_balance(&self, owner: &str, token_contract: &str) -> Option<f64> {
        match self.read_balance(owner, token_contract).await {
            Ok(balance) => Some(balance),
            Err(e) => {
                error!("Error fetching token balance for {}: {:#}", owner, e);
                None
            }
        }
    }
}
