use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::{PriceQuote, Token};
use crate::oracle::models::{DiaQuotation, MoralisTokenPrice};
use crate::oracle::routes::{route_for, PriceSource};
use crate::oracle::{OracleConfig, PriceStore};

/// Source of USD quotes for catalog tokens
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Quote for one token. Never fails: on any upstream problem the previous
    /// quote (or the catalog default) is returned unchanged.
    async fn get_quote(&self, token: &Token) -> PriceQuote;

    /// Quotes for every token, fetched concurrently. Individual failures carry
    /// the previous quote over; only a failure of the batch itself is an error,
    /// in which case nothing is written to the store.
    async fn refresh_all(&self, tokens: &[Token]) -> Result<HashMap<String, PriceQuote>>;

    /// Last stored quote, without touching the network.
    fn cached_quote(&self, token_id: &str) -> Option<PriceQuote>;
}

/// Performs the actual upstream requests for one token.
pub struct QuoteFetcher {
    http_client: Client,
    config: OracleConfig,
}

impl QuoteFetcher {
    pub fn new(config: OracleConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Fetches the current USD price. `Ok(None)` means the token has no route.
    pub async fn fetch_price(&self, token_id: &str) -> Result<Option<f64>> {
        let source = match route_for(token_id) {
            Some(source) => source,
            None => return Ok(None),
        };

        let url = source.url(&self.config);
        debug!("Fetching price for {} from {}", token_id, url);

        let price = match source {
            PriceSource::Dia { .. } => {
                let quotation: DiaQuotation = self.get_json(self.http_client.get(&url)).await?;
                quotation.price
            }
            PriceSource::Moralis { chain, .. } => {
                let api_key = self
                    .config
                    .moralis_api_key
                    .as_deref()
                    .ok_or_else(|| anyhow!("MORALIS_API_KEY is not configured"))?;

                let request = self
                    .http_client
                    .get(&url)
                    .query(&[("chain", chain), ("include", "percent_change")])
                    .header("X-API-Key", api_key);

                let price: MoralisTokenPrice = self.get_json(request).await?;
                price.usd_price
            }
        };

        if !price.is_finite() || price < 0.0 {
            return Err(anyhow!("Upstream returned invalid price {}", price));
        }

        Ok(Some(price))
    }

    async fn get_json<D>(&self, request: reqwest::RequestBuilder) -> Result<D>
    where
        D: serde::de::DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("Price API returned status {}", response.status()));
        }

        response
            .json::<D>()
            .await
            .map_err(|e| anyhow!("Failed to parse price response: {}", e))
    }
}

/// Fresh quote for `previous.token_id`, or `previous` itself when the cached
/// value is within the window, the token has no route, or the fetch fails.
async fn resolve_quote(
    fetcher: &QuoteFetcher,
    previous: PriceQuote,
    window: chrono::Duration,
) -> PriceQuote {
    if previous.is_fresh(Utc::now(), window) {
        return previous;
    }

    match fetcher.fetch_price(&previous.token_id).await {
        Ok(Some(price)) => PriceQuote::fetched(&previous.token_id, price, Utc::now()),
        Ok(None) => previous,
        Err(e) => {
            warn!("Failed to fetch price for {}: {:#}", previous.token_id, e);
            previous
        }
    }
}

/// HTTP-backed oracle with per-token routing and a shared quote store
pub struct HttpPriceOracle {
    fetcher: Arc<QuoteFetcher>,
    store: Arc<PriceStore>,
    window: chrono::Duration,
}

impl HttpPriceOracle {
    pub fn new(config: OracleConfig, store: Arc<PriceStore>) -> Result<Self> {
        let window = chrono::Duration::from_std(config.revalidate_after)
            .map_err(|e| anyhow!("Invalid revalidation window: {}", e))?;

        Ok(Self {
            fetcher: Arc::new(QuoteFetcher::new(config)?),
            store,
            window,
        })
    }

    fn previous_quote(&self, token: &Token) -> PriceQuote {
        self.store
            .get(&token.id)
            .unwrap_or_else(|| PriceQuote::catalog_default(&token.id, token.current_price_usd))
    }
}

#[async_trait]
impl PriceOracle for HttpPriceOracle {
    async fn get_quote(&self, token: &Token) -> PriceQuote {
        let previous = self.previous_quote(token);
        let quote = resolve_quote(&self.fetcher, previous.clone(), self.window).await;

        if quote != previous {
            self.store.put(quote.clone());
        }

        quote
    }

    async fn refresh_all(&self, tokens: &[Token]) -> Result<HashMap<String, PriceQuote>> {
        let handles = tokens.iter().map(|token| {
            let fetcher = self.fetcher.clone();
            let previous = self.previous_quote(token);
            let window = self.window;
            tokio::spawn(async move { resolve_quote(&fetcher, previous, window).await })
        });

        let mut quotes = HashMap::with_capacity(tokens.len());
        for joined in join_all(handles).await {
            let quote = joined.map_err(|e| anyhow!("Price refresh task failed: {}", e))?;
            quotes.insert(quote.token_id.clone(), quote);
        }

        self.store.put_all(quotes.values().cloned());
        info!("Refreshed prices for {} tokens", quotes.len());

        Ok(quotes)
    }

    fn cached_quote(&self, token_id: &str) -> Option<PriceQuote> {
        self.store.get(token_id)
    }
}
