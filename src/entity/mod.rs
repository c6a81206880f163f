mod account;
mod asset_holding;
pub mod catalog;
mod chain;
mod portfolio;
mod price_quote;
mod swap;
mod swap_error;
mod token;

pub use account::SmartAccountOptions;
pub use asset_holding::{AssetHolding, PrimaryAssets};
pub use catalog::{find_chain, find_token, CHAIN_CATALOG, TOKEN_CATALOG};
pub use chain::ChainDescriptor;
pub use portfolio::PortfolioSnapshot;
pub use price_quote::PriceQuote;
pub use swap::{SwapIntent, SwapPhase, SwapReceipt, SwapRequest, SwapTransaction, EXPLORER_BASE_URL};
pub use swap_error::{SwapError, ValidationError};
pub use token::Token;
