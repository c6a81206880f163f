use async_trait::async_trait;
use log::{info, warn};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{watch, Mutex as AttemptLock};
use uuid::Uuid;

use crate::eligibility::is_eligible;
use crate::entity::{
    find_chain, find_token, ChainDescriptor, PortfolioSnapshot, SwapError, SwapIntent, SwapPhase,
    SwapReceipt, SwapRequest, Token, ValidationError,
};
use crate::oracle::PriceOracle;
use crate::universal::{ConvertRequest, ExecutionService, ExpectToken, WalletSigner};
use crate::utils::{format_token_amount, quote_token_amount};

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Runs one attempt: validate, build, sign, submit.
    async fn swap(&self, owner: &str, request: SwapRequest) -> Result<SwapReceipt, SwapError>;

    /// Cancels the attempt in flight if it has not reached `Submitting`.
    fn cancel(&self) -> bool;

    fn phase(&self) -> SwapPhase;

    fn subscribe_phase(&self) -> watch::Receiver<SwapPhase>;

    /// USD amount of the last attempt that did not settle.
    fn draft_usd_amount(&self) -> Option<f64>;
}

/// Drives the three-phase swap pipeline, one attempt at a time.
pub struct SwapOrchestrator {
    execution: Arc<dyn ExecutionService>,
    signer: Arc<dyn WalletSigner>,
    price_oracle: Arc<dyn PriceOracle>,
    tokens: Vec<Token>,
    chains: Vec<ChainDescriptor>,
    portfolio: watch::Receiver<Arc<PortfolioSnapshot>>,
    attempt_lock: AttemptLock<()>,
    phase_tx: watch::Sender<SwapPhase>,
    cancel_tx: Mutex<Option<watch::Sender<bool>>>,
    draft_usd_amount: Mutex<Option<f64>>,
}

impl SwapOrchestrator {
    pub fn new(
        execution: Arc<dyn ExecutionService>,
        signer: Arc<dyn WalletSigner>,
        price_oracle: Arc<dyn PriceOracle>,
        tokens: Vec<Token>,
        chains: Vec<ChainDescriptor>,
        portfolio: watch::Receiver<Arc<PortfolioSnapshot>>,
    ) -> Self {
        let (phase_tx, _) = watch::channel(SwapPhase::Idle);

        Self {
            execution,
            signer,
            price_oracle,
            tokens,
            chains,
            portfolio,
            attempt_lock: AttemptLock::new(()),
            phase_tx,
            cancel_tx: Mutex::new(None),
            draft_usd_amount: Mutex::new(None),
        }
    }

    fn set_phase(&self, phase: SwapPhase) {
        self.phase_tx.send_replace(phase);
    }

    /// Spendable USD for `owner`. A snapshot aggregated for another account counts as nothing.
    fn available_usd(&self, owner: &str) -> f64 {
        let snapshot = self.portfolio.borrow();
        match snapshot.owner.as_deref() {
            Some(snapshot_owner) if snapshot_owner == owner => snapshot.total_usd,
            _ => 0.0,
        }
    }

    fn validate(&self, owner: &str, request: &SwapRequest) -> Result<SwapIntent, ValidationError> {
        if !request.usd_amount.is_finite() || request.usd_amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }

        let available = self.available_usd(owner);
        if request.usd_amount > available {
            return Err(ValidationError::ExceedsBalance {
                requested: request.usd_amount,
                available,
            });
        }

        let token = find_token(&self.tokens, &request.token_id)
            .ok_or_else(|| ValidationError::UnknownToken(request.token_id.clone()))?;
        let chain = find_chain(&self.chains, &request.chain_id)
            .ok_or_else(|| ValidationError::UnknownChain(request.chain_id.clone()))?;

        if !is_eligible(token, chain) {
            return Err(ValidationError::IneligibleChain {
                token: token.symbol.clone(),
                chain: chain.name.clone(),
            });
        }

        Ok(SwapIntent {
            usd_amount: request.usd_amount,
            token: token.clone(),
            chain: chain.clone(),
        })
    }

    async fn run(
        &self,
        attempt: Uuid,
        owner: &str,
        request: SwapRequest,
        mut cancel_rx: watch::Receiver<bool>,
    ) -> Result<SwapReceipt, SwapError> {
        self.set_phase(SwapPhase::Validating);
        let intent = self.validate(owner, &request)?;

        self.set_phase(SwapPhase::Building);
        let quote = until_cancelled(&mut cancel_rx, self.price_oracle.get_quote(&intent.token))
            .await
            .ok_or(SwapError::Cancelled)?;
        let price = quote
            .usable_price()
            .ok_or_else(|| ValidationError::MissingPrice(intent.token.symbol.clone()))?;
        let token_amount = quote_token_amount(intent.usd_amount, price)
            .ok_or_else(|| ValidationError::MissingPrice(intent.token.symbol.clone()))?;
        if token_amount.is_zero() {
            return Err(ValidationError::AmountTooSmall(intent.token.symbol.clone()).into());
        }

        let convert = ConvertRequest {
            expect_token: ExpectToken {
                token_type: intent.token.id.clone(),
                amount: format_token_amount(token_amount),
            },
            chain_id: intent.chain.chain_id,
        };

        info!(
            "[{}] Swapping ${} -> {} {} on {}",
            attempt,
            intent.usd_amount,
            convert.expect_token.amount,
            intent.token.symbol,
            intent.chain.name
        );

        let transaction = until_cancelled(
            &mut cancel_rx,
            self.execution.create_convert_transaction(owner, &convert),
        )
        .await
        .ok_or(SwapError::Cancelled)?
        .map_err(|e| SwapError::Failed {
            phase: SwapPhase::Building,
            reason: format!("{:#}", e),
        })?;

        self.set_phase(SwapPhase::AwaitingSignature);
        let signature = match until_cancelled(
            &mut cancel_rx,
            self.signer.sign_message(owner, &transaction.root_hash),
        )
        .await
        {
            Some(Ok(Some(signature))) => signature,
            Some(Ok(None)) => {
                info!("[{}] Wallet declined to sign", attempt);
                return Err(SwapError::Cancelled);
            }
            Some(Err(e)) => {
                warn!("[{}] Signature not obtained: {:#}", attempt, e);
                return Err(SwapError::Cancelled);
            }
            None => return Err(SwapError::Cancelled),
        };

        // Past this point the attempt can no longer be cancelled
        self.cancel_tx.lock().take();
        if *cancel_rx.borrow() {
            return Err(SwapError::Cancelled);
        }

        self.set_phase(SwapPhase::Submitting);
        self.execution
            .send_transaction(owner, &transaction, &signature)
            .await
            .map_err(|e| SwapError::Failed {
                phase: SwapPhase::Submitting,
                reason: format!("{:#}", e),
            })
    }
}

#[async_trait]
impl SwapInteractor for SwapOrchestrator {
    async fn swap(&self, owner: &str, request: SwapRequest) -> Result<SwapReceipt, SwapError> {
        let _attempt_guard = self.attempt_lock.try_lock().map_err(|_| SwapError::Busy)?;

        let attempt = Uuid::new_v4();
        *self.draft_usd_amount.lock() = Some(request.usd_amount);

        let (cancel_tx, cancel_rx) = watch::channel(false);
        *self.cancel_tx.lock() = Some(cancel_tx);

        let result = self.run(attempt, owner, request, cancel_rx).await;

        self.cancel_tx.lock().take();

        match &result {
            Ok(receipt) => {
                self.draft_usd_amount.lock().take();
                self.set_phase(SwapPhase::Settled);
                info!("[{}] Explorer URL: {}", attempt, receipt.explorer_url());
            }
            Err(e) => {
                self.set_phase(SwapPhase::Idle);
                if e.is_cancelled() || e.is_rejected() {
                    info!("[{}] {}", attempt, e);
                } else {
                    warn!("[{}] {}", attempt, e);
                }
            }
        }

        result
    }

    fn cancel(&self) -> bool {
        match self.cancel_tx.lock().as_ref() {
            Some(tx) => {
                tx.send_replace(true);
                true
            }
            None => false,
        }
    }

    fn phase(&self) -> SwapPhase {
        *self.phase_tx.borrow()
    }

    fn subscribe_phase(&self) -> watch::Receiver<SwapPhase> {
        self.phase_tx.subscribe()
    }

    fn draft_usd_amount(&self) -> Option<f64> {
        *self.draft_usd_amount.lock()
    }
}

/// Output of `fut`, or `None` if the attempt is cancelled first.
async fn until_cancelled<F: Future>(
    cancel_rx: &mut watch::Receiver<bool>,
    fut: F,
) -> Option<F::Output> {
    tokio::select! {
        output = fut => Some(output),
        _ = cancelled(cancel_rx) => None,
    }
}

async fn cancelled(cancel_rx: &mut watch::Receiver<bool>) {
    loop {
        if *cancel_rx.borrow_and_update() {
            return;
        }
        if cancel_rx.changed().await.is_err() {
            // Sender gone without a cancel: never resolves
            futures::future::pending::<()>().await;
        }
    }
}
