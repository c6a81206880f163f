use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,                     // Catalog key, e.g. "usdc"
    pub name: String,                   // Full token name
    pub symbol: String,                 // Ticker, e.g. "USDC"
    pub icon: String,                   // Icon URL
    pub current_price_usd: Option<f64>, // Last known USD price, None until first fetch
    pub description: String,
}

impl Token {
    pub fn new(
        id: &str,
        name: &str,
        symbol: &str,
        icon: &str,
        current_price_usd: Option<f64>,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            icon: icon.to_string(),
            current_price_usd,
            description: description.to_string(),
        }
    }
}
