#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use ua_swap_core::entity::{
    AssetHolding, PortfolioSnapshot, PriceQuote, PrimaryAssets, SmartAccountOptions, SwapReceipt,
    SwapTransaction, Token,
};
use ua_swap_core::evm::BalanceReader;
use ua_swap_core::oracle::PriceOracle;
use ua_swap_core::universal::{ConvertRequest, ExecutionService, WalletSigner};

pub const OWNER: &str = "0x1111111111111111111111111111111111111111";
pub const SMART_ACCOUNT: &str = "0x2222222222222222222222222222222222222222";

pub fn holding(token_type: &str, amount: f64, usd: f64) -> AssetHolding {
    AssetHolding {
        token_type: token_type.to_string(),
        amount,
        amount_in_usd: usd,
    }
}

/// Portfolio channel holding a single snapshot of `OWNER` worth `total_usd`.
pub fn portfolio_worth(
    total_usd: f64,
) -> (
    watch::Sender<Arc<PortfolioSnapshot>>,
    watch::Receiver<Arc<PortfolioSnapshot>>,
) {
    portfolio_of(OWNER, total_usd)
}

pub fn portfolio_of(
    owner: &str,
    total_usd: f64,
) -> (
    watch::Sender<Arc<PortfolioSnapshot>>,
    watch::Receiver<Arc<PortfolioSnapshot>>,
) {
    let snapshot = PortfolioSnapshot {
        owner: Some(owner.to_string()),
        total_usd,
        holdings: vec![holding("usdc", total_usd, total_usd)],
        holding_count: 1,
    };
    watch::channel(Arc::new(snapshot))
}

pub struct FakeExecution {
    pub fail_build: bool,
    pub fail_send: bool,
    pub primary: Mutex<Option<PrimaryAssets>>,
    pub build_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub primary_calls: AtomicUsize,
    pub options_calls: AtomicUsize,
    pub last_convert: Mutex<Option<ConvertRequest>>,
}

impl FakeExecution {
    pub fn new() -> Self {
        Self {
            fail_build: false,
            fail_send: false,
            primary: Mutex::new(Some(PrimaryAssets::default())),
            build_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            primary_calls: AtomicUsize::new(0),
            options_calls: AtomicUsize::new(0),
            last_convert: Mutex::new(None),
        }
    }

    pub fn with_primary(assets: Vec<AssetHolding>) -> Self {
        Self {
            primary: Mutex::new(Some(PrimaryAssets {
                total_amount_in_usd: assets.iter().map(|a| a.amount_in_usd).sum(),
                assets,
            })),
            ..Self::new()
        }
    }

    /// Makes every later primary assets fetch fail.
    pub fn fail_primary(&self) {
        *self.primary.lock().unwrap() = None;
    }

    pub fn builds(&self) -> usize {
        self.build_calls.load(Ordering::SeqCst)
    }

    pub fn sends(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExecutionService for FakeExecution {
    async fn create_convert_transaction(
        &self,
        _owner: &str,
        request: &ConvertRequest,
    ) -> Result<SwapTransaction> {
        self.build_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_convert.lock().unwrap() = Some(request.clone());

        if self.fail_build {
            return Err(anyhow!("no route for requested token"));
        }

        Ok(SwapTransaction {
            root_hash: "0xroot".to_string(),
            descriptor: serde_json::json!({ "rootHash": "0xroot" }),
        })
    }

    async fn send_transaction(
        &self,
        _owner: &str,
        _transaction: &SwapTransaction,
        _signature: &str,
    ) -> Result<SwapReceipt> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_send {
            return Err(anyhow!("bundler rejected operation"));
        }

        Ok(SwapReceipt {
            transaction_id: "tx-1".to_string(),
        })
    }

    async fn get_primary_assets(&self, _owner: &str) -> Result<PrimaryAssets> {
        self.primary_calls.fetch_add(1, Ordering::SeqCst);
        self.primary
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow!("primary assets unavailable"))
    }

    async fn get_smart_account_options(&self, owner: &str) -> Result<SmartAccountOptions> {
        self.options_calls.fetch_add(1, Ordering::SeqCst);
        Ok(SmartAccountOptions {
            owner_address: owner.to_string(),
            evm_address: SMART_ACCOUNT.to_string(),
            solana_address: "So1anaSmartAccount111111111111111111111111".to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub enum SignBehavior {
    Sign,
    Decline,
    Fail,
    Hang,
}

pub struct FakeSigner {
    pub behavior: SignBehavior,
    pub calls: AtomicUsize,
}

impl FakeSigner {
    pub fn new(behavior: SignBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletSigner for FakeSigner {
    async fn sign_message(&self, _account: &str, raw_hash: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            SignBehavior::Sign => Ok(Some(format!("sig:{}", raw_hash))),
            SignBehavior::Decline => Ok(None),
            SignBehavior::Fail => Err(anyhow!("wallet bridge timed out")),
            SignBehavior::Hang => futures::future::pending().await,
        }
    }
}

/// Oracle answering from a fixed table; unlisted tokens are unpriced.
pub struct FakeOracle {
    pub prices: HashMap<String, f64>,
    pub quote_calls: AtomicUsize,
    pub fail_batch: bool,
}

impl FakeOracle {
    pub fn new(prices: &[(&str, f64)]) -> Self {
        Self {
            prices: prices
                .iter()
                .map(|(id, price)| (id.to_string(), *price))
                .collect(),
            quote_calls: AtomicUsize::new(0),
            fail_batch: false,
        }
    }

    fn quote(&self, token: &Token) -> PriceQuote {
        match self.prices.get(&token.id) {
            Some(price) => PriceQuote::fetched(&token.id, *price, Utc::now()),
            None => PriceQuote::catalog_default(&token.id, None),
        }
    }
}

#[async_trait]
impl PriceOracle for FakeOracle {
    async fn get_quote(&self, token: &Token) -> PriceQuote {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        self.quote(token)
    }

    async fn refresh_all(&self, tokens: &[Token]) -> Result<HashMap<String, PriceQuote>> {
        if self.fail_batch {
            return Err(anyhow!("price refresh task failed"));
        }
        Ok(tokens
            .iter()
            .map(|token| (token.id.clone(), self.quote(token)))
            .collect())
    }

    fn cached_quote(&self, _token_id: &str) -> Option<PriceQuote> {
        None
    }
}

pub struct FakeBalanceReader {
    pub balance: Option<f64>,
    pub calls: AtomicUsize,
}

impl FakeBalanceReader {
    pub fn new(balance: Option<f64>) -> Self {
        Self {
            balance,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BalanceReader for FakeBalanceReader {
    async fn get_balance(&self, owner: &str, _token_contract: &str) -> Option<f64> {
        assert_eq!(owner, SMART_ACCOUNT, "balance must be read for the smart account");
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.balance
    }
}
