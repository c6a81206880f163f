use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::oracle::OracleConfig;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
pub const USDC_BASE_ADDRESS: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const USDT_ETHEREUM_ADDRESS: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const PARTI_BSC_ADDRESS: &str = "0x59264f02D301281f3393e1385c0aEFd446Eb0F00";

/// Upstream a token's USD price is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    /// Primary quotation API, keyed by blockchain name and contract address
    Dia {
        blockchain: &'static str,
        address: &'static str,
    },
    /// Secondary ERC-20 price API, keyed by contract address and chain
    Moralis {
        chain: &'static str,
        address: &'static str,
    },
}

impl PriceSource {
    pub fn url(&self, config: &OracleConfig) -> String {
        match self {
            Self::Dia {
                blockchain,
                address,
            } => format!(
                "{}/assetQuotation/{}/{}",
                config.dia_api_url.trim_end_matches('/'),
                blockchain,
                address
            ),
            Self::Moralis { address, .. } => format!(
                "{}/erc20/{}/price",
                config.moralis_api_url.trim_end_matches('/'),
                address
            ),
        }
    }
}

lazy_static! {
    /// One route per token id. Tokens missing here keep their previous price.
    pub static ref PRICE_ROUTES: HashMap<&'static str, PriceSource> = {
        let mut routes = HashMap::new();
        routes.insert(
            "sol",
            PriceSource::Dia { blockchain: "Solana", address: ZERO_ADDRESS },
        );
        routes.insert(
            "eth",
            PriceSource::Dia { blockchain: "Ethereum", address: ZERO_ADDRESS },
        );
        routes.insert(
            "btc",
            PriceSource::Dia { blockchain: "Bitcoin", address: ZERO_ADDRESS },
        );
        routes.insert(
            "bnb",
            PriceSource::Dia { blockchain: "BinanceSmartChain", address: ZERO_ADDRESS },
        );
        // Stablecoins are quoted off their canonical contracts, not the chain's native asset
        routes.insert(
            "usdc",
            PriceSource::Dia { blockchain: "Base", address: USDC_BASE_ADDRESS },
        );
        routes.insert(
            "usdt",
            PriceSource::Dia { blockchain: "Ethereum", address: USDT_ETHEREUM_ADDRESS },
        );
        routes.insert(
            "parti",
            PriceSource::Moralis { chain: "bsc", address: PARTI_BSC_ADDRESS },
        );
        routes
    };
}

pub fn route_for(token_id: &str) -> Option<PriceSource> {
    PRICE_ROUTES.get(token_id).copied()
}
