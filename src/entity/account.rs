use serde::{Deserialize, Serialize};

/// Smart account addresses behind one owner, one per chain family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartAccountOptions {
    pub owner_address: String,
    #[serde(rename = "smartAccountAddress")]
    pub evm_address: String,
    #[serde(rename = "solanaSmartAccountAddress")]
    pub solana_address: String,
}
