use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub token_id: String,
    pub price_usd: Option<f64>,            // None while the token has never been priced
    pub fetched_at: Option<DateTime<Utc>>, // None for catalog defaults
}

impl PriceQuote {
    /// Quote carried over from the catalog default, never fetched upstream.
    pub fn catalog_default(token_id: &str, price_usd: Option<f64>) -> Self {
        Self {
            token_id: token_id.to_string(),
            price_usd,
            fetched_at: None,
        }
    }

    pub fn fetched(token_id: &str, price_usd: f64, fetched_at: DateTime<Utc>) -> Self {
        Self {
            token_id: token_id.to_string(),
            price_usd: Some(price_usd),
            fetched_at: Some(fetched_at),
        }
    }

    /// Usable price: present, finite and strictly positive.
    pub fn usable_price(&self) -> Option<f64> {
        self.price_usd.filter(|p| p.is_finite() && *p > 0.0)
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.fetched_at {
            Some(at) => now - at < window,
            None => false,
        }
    }
}
