use crate::entity::SwapPhase;

/// Reasons a swap is refused before anything is sent to the execution service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Amount ${requested:.2} exceeds available balance ${available:.2}")]
    ExceedsBalance { requested: f64, available: f64 },

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("{token} cannot be received on {chain}")]
    IneligibleChain { token: String, chain: String },

    #[error("No usable price for {0}")]
    MissingPrice(String),

    #[error("Amount is too small to buy any {0}")]
    AmountTooSmall(String),

    #[error("No account is connected")]
    AccountNotConnected,
}

#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("Swap rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("Another swap is already in progress")]
    Busy,

    #[error("Swap cancelled")]
    Cancelled,

    #[error("Swap failed while {phase}: {reason}")]
    Failed { phase: SwapPhase, reason: String },
}

impl SwapError {
    /// True when the signed transaction reached the execution service, which
    /// may have cost fees even though the swap did not settle.
    pub fn was_dispatched(&self) -> bool {
        matches!(
            self,
            Self::Failed {
                phase: SwapPhase::Submitting,
                ..
            }
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Busy)
    }
}
