use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

use crate::entity::{AssetHolding, PortfolioSnapshot, PriceQuote, PrimaryAssets, SmartAccountOptions, Token};
use crate::evm::BalanceReader;
use crate::oracle::PriceOracle;
use crate::universal::ExecutionService;
use crate::utils::{format_usd, truncate_address};

/// Combines the primary assets snapshot with the extra token holding.
///
/// Only holdings worth more than zero are kept, and the total is the sum of
/// exactly those holdings in list order. The extra holding is added only when
/// both its balance and a usable price are known.
pub fn aggregate(
    primary: &PrimaryAssets,
    extra_token_type: &str,
    extra_balance: Option<f64>,
    extra_price: Option<&PriceQuote>,
) -> PortfolioSnapshot {
    let mut holdings: Vec<AssetHolding> = primary
        .assets
        .iter()
        .filter(|asset| asset.amount_in_usd > 0.0)
        .cloned()
        .collect();

    let extra_price = extra_price.and_then(|quote| quote.usable_price());
    if let (Some(balance), Some(price)) = (extra_balance, extra_price) {
        let value = balance * price;
        if value > 0.0 {
            holdings.push(AssetHolding {
                token_type: extra_token_type.to_string(),
                amount: balance,
                amount_in_usd: value,
            });
        }
    }

    let total_usd = holdings.iter().map(|h| h.amount_in_usd).sum();

    PortfolioSnapshot {
        owner: None,
        total_usd,
        holding_count: holdings.len(),
        holdings,
    }
}

/// Token held outside the primary assets and read directly on chain.
#[derive(Debug, Clone)]
pub struct ExtraToken {
    pub token: Token,
    pub contract_address: String,
}

#[async_trait]
pub trait PortfolioInteractor: Send + Sync {
    /// Builds a fresh snapshot for `owner` without publishing it.
    async fn load(&self, owner: &str) -> Result<PortfolioSnapshot>;

    /// Builds a fresh snapshot for `owner` and publishes it to subscribers.
    async fn refresh(&self, owner: &str) -> Result<Arc<PortfolioSnapshot>>;

    /// Smart account addresses for `owner`, fetched once and cached.
    async fn account_options(&self, owner: &str) -> Result<SmartAccountOptions>;

    fn latest(&self) -> Arc<PortfolioSnapshot>;

    fn subscribe(&self) -> watch::Receiver<Arc<PortfolioSnapshot>>;

    /// Forgets account state and publishes an empty snapshot.
    fn reset(&self);
}

pub struct PortfolioInteractorImpl {
    execution: Arc<dyn ExecutionService>,
    balance_reader: Arc<dyn BalanceReader>,
    price_oracle: Arc<dyn PriceOracle>,
    extra_token: ExtraToken,
    accounts: Mutex<HashMap<String, SmartAccountOptions>>,
    snapshot_tx: watch::Sender<Arc<PortfolioSnapshot>>,
}

impl PortfolioInteractorImpl {
    pub fn new(
        execution: Arc<dyn ExecutionService>,
        balance_reader: Arc<dyn BalanceReader>,
        price_oracle: Arc<dyn PriceOracle>,
        extra_token: ExtraToken,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(Arc::new(PortfolioSnapshot::default()));

        Self {
            execution,
            balance_reader,
            price_oracle,
            extra_token,
            accounts: Mutex::new(HashMap::new()),
            snapshot_tx,
        }
    }

    async fn extra_holding(&self, owner: &str) -> (Option<f64>, Option<PriceQuote>) {
        let options = match self.account_options(owner).await {
            Ok(options) => options,
            Err(e) => {
                warn!("Skipping extra token, account options unavailable: {:#}", e);
                return (None, None);
            }
        };

        let balance = self
            .balance_reader
            .get_balance(&options.evm_address, &self.extra_token.contract_address)
            .await;

        match balance {
            Some(balance) => {
                let quote = self.price_oracle.get_quote(&self.extra_token.token).await;
                (Some(balance), Some(quote))
            }
            None => (None, None),
        }
    }
}

#[async_trait]
impl PortfolioInteractor for PortfolioInteractorImpl {
    async fn load(&self, owner: &str) -> Result<PortfolioSnapshot> {
        let (primary, (balance, quote)) = tokio::join!(
            self.execution.get_primary_assets(owner),
            self.extra_holding(owner)
        );
        let primary = primary?;

        debug!(
            "Primary assets for {}: {} holdings, extra balance {:?}",
            owner,
            primary.assets.len(),
            balance
        );

        Ok(PortfolioSnapshot {
            owner: Some(owner.to_string()),
            ..aggregate(&primary, &self.extra_token.token.id, balance, quote.as_ref())
        })
    }

    async fn refresh(&self, owner: &str) -> Result<Arc<PortfolioSnapshot>> {
        let snapshot = Arc::new(self.load(owner).await?);
        self.snapshot_tx.send_replace(snapshot.clone());

        info!(
            "Portfolio for {}: {} across {} holdings",
            truncate_address(owner, 6),
            format_usd(snapshot.total_usd),
            snapshot.holding_count
        );

        Ok(snapshot)
    }

    async fn account_options(&self, owner: &str) -> Result<SmartAccountOptions> {
        let cached = self.accounts.lock().get(owner).cloned();
        if let Some(options) = cached {
            return Ok(options);
        }

        let options = self.execution.get_smart_account_options(owner).await?;
        self.accounts
            .lock()
            .insert(owner.to_string(), options.clone());

        Ok(options)
    }

    fn latest(&self) -> Arc<PortfolioSnapshot> {
        self.snapshot_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Arc<PortfolioSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    fn reset(&self) {
        self.accounts.lock().clear();
        self.snapshot_tx
            .send_replace(Arc::new(PortfolioSnapshot::default()));
    }
}
