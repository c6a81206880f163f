use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::entity::{SwapError, SwapReceipt, SwapRequest, ValidationError};
use crate::interactor::{PortfolioInteractor, PriceInteractor, SwapInteractor};
use crate::utils::truncate_address;

/// Domain events driving one user session.
#[derive(Debug)]
pub enum SessionEvent {
    AccountConnected {
        owner: String,
    },
    RefreshPortfolio,
    SwapPanelOpened,
    SwapRequested {
        request: SwapRequest,
        reply: oneshot::Sender<Result<SwapReceipt, SwapError>>,
    },
    SwapPanelClosed,
    Disconnected,
    Shutdown,
}

/// Owns the session state and reacts to events sent over its channel.
pub struct SessionService {
    events_tx: mpsc::Sender<SessionEvent>,
    handle: JoinHandle<()>,
}

struct SessionLoop {
    portfolio: Arc<dyn PortfolioInteractor>,
    prices: Arc<dyn PriceInteractor>,
    swaps: Arc<dyn SwapInteractor>,
    owner: Option<String>,
}

impl SessionService {
    pub fn spawn(
        portfolio: Arc<dyn PortfolioInteractor>,
        prices: Arc<dyn PriceInteractor>,
        swaps: Arc<dyn SwapInteractor>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(32);
        let session = SessionLoop {
            portfolio,
            prices,
            swaps,
            owner: None,
        };

        let handle = tokio::spawn(session.run(events_rx));

        Self { events_tx, handle }
    }

    pub fn sender(&self) -> mpsc::Sender<SessionEvent> {
        self.events_tx.clone()
    }

    pub async fn dispatch(&self, event: SessionEvent) -> Result<()> {
        self.events_tx
            .send(event)
            .await
            .map_err(|_| anyhow!("Session has stopped"))
    }

    /// Sends a swap request and waits for its outcome.
    pub async fn request_swap(&self, request: SwapRequest) -> Result<SwapReceipt, SwapError> {
        let (reply, outcome) = oneshot::channel();

        self.dispatch(SessionEvent::SwapRequested { request, reply })
            .await
            .map_err(|_| SwapError::Cancelled)?;

        outcome.await.unwrap_or(Err(SwapError::Cancelled))
    }

    pub async fn shutdown(self) {
        let _ = self.events_tx.send(SessionEvent::Shutdown).await;
        if let Err(e) = self.handle.await {
            error!("Session task ended abnormally: {}", e);
        }
    }
}

impl SessionLoop {
    async fn run(mut self, mut events_rx: mpsc::Receiver<SessionEvent>) {
        while let Some(event) = events_rx.recv().await {
            debug!("Session event: {:?}", event);

            match event {
                SessionEvent::AccountConnected { owner } => {
                    info!("Account connected: {}", truncate_address(&owner, 6));
                    // Nothing of the previous account may stay published
                    self.swaps.cancel();
                    self.portfolio.reset();
                    self.owner = Some(owner.clone());

                    if let Err(e) = self.portfolio.account_options(&owner).await {
                        warn!("Failed to load account options for {}: {:#}", owner, e);
                    }
                    self.refresh_portfolio().await;
                }
                SessionEvent::RefreshPortfolio => self.refresh_portfolio().await,
                SessionEvent::SwapPanelOpened => {
                    if let Err(e) = self.prices.get_tokens().await {
                        warn!("Failed to refresh token prices: {:#}", e);
                    }
                }
                SessionEvent::SwapRequested { request, reply } => self.start_swap(request, reply),
                SessionEvent::SwapPanelClosed => {
                    if self.swaps.cancel() {
                        info!("Swap panel closed, in-flight swap cancelled");
                    }
                }
                SessionEvent::Disconnected => {
                    info!("Account disconnected");
                    self.swaps.cancel();
                    self.owner = None;
                    self.portfolio.reset();
                }
                SessionEvent::Shutdown => {
                    info!("Session shutting down");
                    self.swaps.cancel();
                    break;
                }
            }
        }
    }

    async fn refresh_portfolio(&self) {
        let owner = match &self.owner {
            Some(owner) => owner,
            None => {
                debug!("Portfolio refresh skipped, no account connected");
                return;
            }
        };

        if let Err(e) = self.portfolio.refresh(owner).await {
            warn!("Failed to refresh portfolio for {}: {:#}", owner, e);
        }
    }

    // Runs the swap on its own task so events like SwapPanelClosed keep flowing
    fn start_swap(
        &self,
        request: SwapRequest,
        reply: oneshot::Sender<Result<SwapReceipt, SwapError>>,
    ) {
        let owner = match &self.owner {
            Some(owner) => owner.clone(),
            None => {
                let _ = reply.send(Err(ValidationError::AccountNotConnected.into()));
                return;
            }
        };

        let swaps = self.swaps.clone();
        let portfolio = self.portfolio.clone();

        tokio::spawn(async move {
            let outcome = swaps.swap(&owner, request).await;

            if outcome.is_ok() {
                if let Err(e) = portfolio.refresh(&owner).await {
                    warn!("Failed to refresh portfolio after swap: {:#}", e);
                }
            }

            let _ = reply.send(outcome);
        });
    }
}
