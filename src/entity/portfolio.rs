use serde::{Deserialize, Serialize};

use crate::entity::AssetHolding;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>, // Account the snapshot was aggregated for
    pub total_usd: f64,
    pub holdings: Vec<AssetHolding>, // Only holdings with a positive USD value
    pub holding_count: usize,
}
