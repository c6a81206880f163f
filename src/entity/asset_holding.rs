use serde::{Deserialize, Serialize};

/// One per-token holding as reported by the execution service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolding {
    pub token_type: String,
    pub amount: f64,
    #[serde(rename = "amountInUSD")]
    pub amount_in_usd: f64,
}

/// Multi-chain "primary assets" snapshot, consumed read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryAssets {
    #[serde(rename = "totalAmountInUSD", default)]
    pub total_amount_in_usd: f64,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
}
