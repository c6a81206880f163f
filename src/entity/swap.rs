use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::{ChainDescriptor, Token};

pub const EXPLORER_BASE_URL: &str = "https://universalx.app/activity/details";

/// User input for one swap attempt, before resolution against the catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub usd_amount: f64,
    pub token_id: String,
    pub chain_id: String, // Display identifier of the destination chain
}

/// Resolved intent, alive only for the duration of one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapIntent {
    pub usd_amount: f64,
    pub token: Token,
    pub chain: ChainDescriptor,
}

/// Unsigned transaction descriptor returned by the build phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTransaction {
    pub root_hash: String,
    pub descriptor: serde_json::Value, // Opaque body, echoed back on submit
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapReceipt {
    pub transaction_id: String,
}

impl SwapReceipt {
    pub fn explorer_url(&self) -> String {
        format!("{}?id={}", EXPLORER_BASE_URL, self.transaction_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapPhase {
    #[default]
    Idle,
    Validating,
    Building,
    AwaitingSignature,
    Submitting,
    Settled,
}

impl fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Idle => write!(f, "Idle"),
            Self::Validating => write!(f, "Validating"),
            Self::Building => write!(f, "Building"),
            Self::AwaitingSignature => write!(f, "AwaitingSignature"),
            Self::Submitting => write!(f, "Submitting"),
            Self::Settled => write!(f, "Settled"),
        }
    }
}
