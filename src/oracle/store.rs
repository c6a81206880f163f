use parking_lot::RwLock;
use std::collections::HashMap;

use crate::entity::PriceQuote;

/// Process-wide quote cache. Written only by the price oracle; every write
/// replaces whole quotes, and batch writes land under a single lock.
#[derive(Debug, Default)]
pub struct PriceStore {
    quotes: RwLock<HashMap<String, PriceQuote>>,
}

impl PriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token_id: &str) -> Option<PriceQuote> {
        self.quotes.read().get(token_id).cloned()
    }

    pub fn put(&self, quote: PriceQuote) {
        self.quotes.write().insert(quote.token_id.clone(), quote);
    }

    pub fn put_all(&self, quotes: impl IntoIterator<Item = PriceQuote>) {
        let mut guard = self.quotes.write();
        for quote in quotes {
            guard.insert(quote.token_id.clone(), quote);
        }
    }

    pub fn snapshot(&self) -> HashMap<String, PriceQuote> {
        self.quotes.read().clone()
    }
}
