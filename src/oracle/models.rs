use serde::Deserialize;

/// Response of the primary quotation API; only the price is used.
#[derive(Debug, Clone, Deserialize)]
pub struct DiaQuotation {
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Symbol", default)]
    pub symbol: Option<String>,
}

/// Response of the secondary ERC-20 price API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoralisTokenPrice {
    pub usd_price: f64,
    #[serde(rename = "24hrPercentChange", default)]
    pub percent_change_24h: Option<String>,
}
