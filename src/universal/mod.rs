pub mod config;
pub mod execution;
pub mod models;
pub mod signer;

pub use config::UniversalConfig;
pub use execution::{ExecutionService, HttpExecutionService};
pub use models::{ConvertRequest, ExpectToken, TradeConfig};
pub use signer::{HttpWalletSigner, WalletSigner};
