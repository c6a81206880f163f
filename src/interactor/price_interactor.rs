use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::{PriceQuote, Token};
use crate::oracle::PriceOracle;

/// Catalog tokens with `quotes` merged in. Tokens priced by a fresh upstream
/// fetch also get the swap description.
pub fn merge_quotes(catalog: &[Token], quotes: &HashMap<String, PriceQuote>) -> Vec<Token> {
    catalog
        .iter()
        .map(|token| match quotes.get(&token.id) {
            Some(quote) if quote.fetched_at.is_some() => Token {
                current_price_usd: quote.price_usd,
                description: format!("Swap for {} on multiple chains", token.name),
                ..token.clone()
            },
            Some(quote) => Token {
                current_price_usd: quote.price_usd.or(token.current_price_usd),
                ..token.clone()
            },
            None => token.clone(),
        })
        .collect()
}

#[async_trait]
pub trait PriceInteractor: Send + Sync {
    /// Catalog in declared order with freshly merged prices.
    async fn get_tokens(&self) -> Result<Vec<Token>>;

    fn catalog(&self) -> &[Token];
}

pub struct PriceInteractorImpl {
    price_oracle: Arc<dyn PriceOracle>,
    catalog: Vec<Token>,
}

impl PriceInteractorImpl {
    pub fn new(price_oracle: Arc<dyn PriceOracle>, catalog: Vec<Token>) -> Self {
        Self {
            price_oracle,
            catalog,
        }
    }
}

#[async_trait]
impl PriceInteractor for PriceInteractorImpl {
    async fn get_tokens(&self) -> Result<Vec<Token>> {
        let quotes = self.price_oracle.refresh_all(&self.catalog).await?;
        Ok(merge_quotes(&self.catalog, &quotes))
    }

    fn catalog(&self) -> &[Token] {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{find_token, TOKEN_CATALOG};
    use chrono::Utc;

    #[test]
    fn merge_keeps_order_and_count() {
        let mut quotes = HashMap::new();
        quotes.insert("eth".to_string(), PriceQuote::fetched("eth", 2500.0, Utc::now()));

        let merged = merge_quotes(&TOKEN_CATALOG, &quotes);

        let ids: Vec<_> = merged.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<_> = TOKEN_CATALOG.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn fetched_quotes_replace_price_and_description() {
        let mut quotes = HashMap::new();
        quotes.insert("eth".to_string(), PriceQuote::fetched("eth", 2500.0, Utc::now()));
        quotes.insert("sol".to_string(), PriceQuote::catalog_default("sol", Some(150.0)));

        let merged = merge_quotes(&TOKEN_CATALOG, &quotes);
        let eth = find_token(&merged, "eth").unwrap();
        let sol = find_token(&merged, "sol").unwrap();
        let catalog_sol = find_token(&TOKEN_CATALOG, "sol").unwrap();

        assert_eq!(eth.current_price_usd, Some(2500.0));
        assert_eq!(eth.description, "Swap for Ethereum on multiple chains");
        assert_eq!(sol, catalog_sol);
    }
}
