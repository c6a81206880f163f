use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::entity::{find_token, ChainDescriptor, Token, CHAIN_CATALOG, TOKEN_CATALOG};
use crate::evm::{BalanceReader, Erc20BalanceReader};
use crate::interactor::{
    ExtraToken, PortfolioInteractor, PortfolioInteractorImpl, PriceInteractor,
    PriceInteractorImpl, SwapInteractor, SwapOrchestrator,
};
use crate::oracle::{HttpPriceOracle, PriceOracle, PriceStore};
use crate::services::{PriceRefreshService, SessionService};
use crate::universal::{ExecutionService, HttpExecutionService, HttpWalletSigner, WalletSigner};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Shared state
    price_store: Arc<PriceStore>,

    // External collaborators
    price_oracle: Arc<dyn PriceOracle>,
    balance_reader: Arc<dyn BalanceReader>,
    execution: Arc<dyn ExecutionService>,
    signer: Arc<dyn WalletSigner>,

    // Interactors
    price_interactor: Arc<dyn PriceInteractor>,
    portfolio_interactor: Arc<dyn PortfolioInteractor>,
    swap_interactor: Arc<dyn SwapInteractor>,

    // Catalogs
    tokens: Vec<Token>,
    chains: Vec<ChainDescriptor>,

    // Configuration
    config: AppConfig,
}

impl ServiceContainer {
    pub fn new(config: AppConfig) -> Result<Self> {
        let tokens = TOKEN_CATALOG.clone();
        let chains = CHAIN_CATALOG.clone();

        let price_store = Arc::new(PriceStore::new());
        let price_oracle = Arc::new(HttpPriceOracle::new(config.oracle.clone(), price_store.clone())?)
            as Arc<dyn PriceOracle>;

        let balance_reader = Arc::new(Erc20BalanceReader::new(
            &config.balance_rpc_url,
            config.extra_token_decimals,
            config.oracle.http_timeout,
        )) as Arc<dyn BalanceReader>;

        let execution = Arc::new(HttpExecutionService::new(config.universal.clone())?)
            as Arc<dyn ExecutionService>;
        let signer =
            Arc::new(HttpWalletSigner::new(&config.universal)?) as Arc<dyn WalletSigner>;

        let extra_token = find_token(&tokens, &config.extra_token_id)
            .cloned()
            .ok_or_else(|| anyhow!("Extra token {} is not in the catalog", config.extra_token_id))?;

        let price_interactor = Arc::new(PriceInteractorImpl::new(
            price_oracle.clone(),
            tokens.clone(),
        )) as Arc<dyn PriceInteractor>;

        let portfolio = PortfolioInteractorImpl::new(
            execution.clone(),
            balance_reader.clone(),
            price_oracle.clone(),
            ExtraToken {
                token: extra_token,
                contract_address: config.extra_token_address.clone(),
            },
        );
        let portfolio_rx = portfolio.subscribe();
        let portfolio_interactor = Arc::new(portfolio) as Arc<dyn PortfolioInteractor>;

        let swap_interactor = Arc::new(SwapOrchestrator::new(
            execution.clone(),
            signer.clone(),
            price_oracle.clone(),
            tokens.clone(),
            chains.clone(),
            portfolio_rx,
        )) as Arc<dyn SwapInteractor>;

        Ok(Self {
            price_store,
            price_oracle,
            balance_reader,
            execution,
            signer,
            price_interactor,
            portfolio_interactor,
            swap_interactor,
            tokens,
            chains,
            config,
        })
    }

    pub fn price_refresh_service(&self) -> PriceRefreshService {
        PriceRefreshService::new(
            self.price_oracle.clone(),
            self.tokens.clone(),
            self.config.price_refresh_interval,
        )
    }

    /// Starts a session loop over the shared interactors. Swaps are requested
    /// through the returned handle; the HTTP host exposes read paths only.
    pub fn spawn_session(&self) -> SessionService {
        SessionService::spawn(
            self.portfolio_interactor.clone(),
            self.price_interactor.clone(),
            self.swap_interactor.clone(),
        )
    }

    // Accessor methods

    pub fn price_store(&self) -> Arc<PriceStore> {
        self.price_store.clone()
    }

    pub fn price_oracle(&self) -> Arc<dyn PriceOracle> {
        self.price_oracle.clone()
    }

    pub fn balance_reader(&self) -> Arc<dyn BalanceReader> {
        self.balance_reader.clone()
    }

    pub fn execution(&self) -> Arc<dyn ExecutionService> {
        self.execution.clone()
    }

    pub fn signer(&self) -> Arc<dyn WalletSigner> {
        self.signer.clone()
    }

    pub fn price_interactor(&self) -> Arc<dyn PriceInteractor> {
        self.price_interactor.clone()
    }

    pub fn portfolio_interactor(&self) -> Arc<dyn PortfolioInteractor> {
        self.portfolio_interactor.clone()
    }

    pub fn swap_interactor(&self) -> Arc<dyn SwapInteractor> {
        self.swap_interactor.clone()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn chains(&self) -> &[ChainDescriptor] {
        &self.chains
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
