use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant};

use crate::entity::Token;
use crate::oracle::PriceOracle;

/// Keeps the shared quote store warm by refreshing the whole catalog on a timer.
pub struct PriceRefreshService {
    price_oracle: Arc<dyn PriceOracle>,
    catalog: Vec<Token>,
    period: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
}

impl PriceRefreshService {
    pub fn new(price_oracle: Arc<dyn PriceOracle>, catalog: Vec<Token>, period: Duration) -> Self {
        Self {
            price_oracle,
            catalog,
            period,
            stop_tx: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.stop_tx.is_some() {
            warn!("Price refresh service is already running");
            return Ok(());
        }

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let price_oracle = self.price_oracle.clone();
        let catalog = self.catalog.clone();
        let mut ticker = interval(self.period);

        tokio::spawn(async move {
            let mut last_run = Instant::now();

            loop {
                select! {
                    _ = ticker.tick() => {
                        debug!("Refreshing prices (last run: {:.2?} ago)", last_run.elapsed());

                        if let Err(e) = price_oracle.refresh_all(&catalog).await {
                            error!("Error refreshing prices: {:#}", e);
                        }

                        last_run = Instant::now();
                    }
                    _ = stop_rx.recv() => {
                        info!("Stopping price refresh service");
                        break;
                    }
                }
            }
        });

        info!("Price refresh service started");
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
            info!("Price refresh service stop signal sent");
        }
    }
}
