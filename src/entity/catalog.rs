use lazy_static::lazy_static;

use crate::entity::{ChainDescriptor, Token};

pub const PLACEHOLDER_ICON: &str = "https://via.placeholder.com/40";

const CHAIN_ICON_BASE: &str =
    "https://universalx.app/_next/image?url=https%3A%2F%2Fstatic.particle.network%2Fchains";

fn chain_icon(family: &str, id: u64) -> String {
    format!("{}%2F{}%2Ficons%2F{}.png&w=32&q=75", CHAIN_ICON_BASE, family, id)
}

lazy_static! {
    /// Tokens offered as swap targets, in display order.
    pub static ref TOKEN_CATALOG: Vec<Token> = vec![
        Token::new(
            "usdt",
            "Tether",
            "USDT",
            "https://imgs.search.brave.com/8f34VWezwOD_VJ03ER5HlzAS6DZHPYwx7s_48DL3uOI/rs:fit:860:0:0:0/g:ce/aHR0cHM6Ly9hc3Nl/dHMua3Jha2VuLmNv/bS9tYXJrZXRpbmcv/d2ViL2ljb25zLXVu/aS13ZWJwL3NfdXNk/dC53ZWJwP2k9a2Rz",
            Some(1.0),
            "Tether (USDT) is a stablecoin pegged to the US dollar.",
        ),
        Token::new(
            "usdc",
            "USD Coin",
            "USDC",
            "https://imgs.search.brave.com/Hs-InvveRF-d_DtjChjGUfHxPPV9QvyZ4d8OqWWATtA/rs:fit:860:0:0:0/g:ce/aHR0cHM6Ly9jZG4t/aWNvbnMtcG5nLmZs/YXRpY29uLmNvbS81/MTIvMTQ0NDYvMTQ0/NDYyODUucG5n",
            Some(1.0),
            "USD Coin (USDC) is a stablecoin backed by fully reserved assets.",
        ),
        Token::new(
            "eth",
            "Ethereum",
            "ETH",
            "https://imgs.search.brave.com/PNOo568ygD9SRI_1SyGxZn3jKt8VmcfHA2WRxI_ZIrE/rs:fit:860:0:0:0/g:ce/aHR0cHM6Ly9pY29u/cy5pY29uYXJjaGl2/ZS5jb20vaWNvbnMv/Y2pkb3duZXIvY3J5/cHRvY3VycmVuY3kt/ZmxhdC81MTIvRXRo/ZXJldW0tRVRILWlj/b24ucG5n",
            Some(3500.0),
            "Ethereum is a decentralized, open-source blockchain with smart contract functionality.",
        ),
        Token::new(
            "sol",
            "Solana",
            "SOL",
            "https://imgs.search.brave.com/KaYJiw36W6f27WtnKzk_95j74lW0TP5nmvYN7h8kkjo/rs:fit:860:0:0:0/g:ce/aHR0cHM6Ly9pbWFn/ZXMuc2Vla2xvZ28u/Y29tL2xvZ28tcG5n/LzQyLzIvc29sYW5h/LXNvbC1sb2dvLXBu/Z19zZWVrbG9nby00/MjMwOTUucG5n",
            Some(150.0),
            "Solana is a high-performance blockchain supporting dApps and crypto projects.",
        ),
        Token::new(
            "btc",
            "Bitcoin",
            "BTC",
            "https://imgs.search.brave.com/_Uh3OOTskflR3kSwaZYKFluj25abSbsSc-Ih1VoxaDk/rs:fit:860:0:0:0/g:ce/aHR0cHM6Ly9jZG4t/aWNvbnMtcG5nLmZy/ZWVwaWsuY29tLzI1/Ni81OTY4LzU5Njgy/NjAucG5nP3NlbXQ9/YWlzX2h5YnJpZA",
            Some(65000.0),
            "Bitcoin is a decentralized digital currency, without a central bank or single administrator.",
        ),
        Token::new(
            "bnb",
            "BNB",
            "BNB",
            &chain_icon("evm", 56),
            None,
            "BNB is the native asset of BNB Chain.",
        ),
        Token::new(
            "parti",
            "Particle Network",
            "PARTI",
            PLACEHOLDER_ICON,
            None,
            "PARTI is the token of Particle Network, issued on BNB Chain.",
        ),
    ];

    /// Destination chains, in the order they are offered.
    pub static ref CHAIN_CATALOG: Vec<ChainDescriptor> = vec![
        ChainDescriptor::new("solana", "Solana", &chain_icon("solana", 101), 101),
        ChainDescriptor::new("ethereum", "Ethereum", &chain_icon("evm", 1), 1),
        ChainDescriptor::new("bnb", "BNB Chain", &chain_icon("evm", 56), 56),
        ChainDescriptor::new("base", "Base", &chain_icon("evm", 8453), 8453),
        ChainDescriptor::new("arbitrum", "Arbitrum", &chain_icon("evm", 42161), 42161),
        ChainDescriptor::new("avalanche", "Avalanche", &chain_icon("evm", 43114), 43114),
        ChainDescriptor::new("optimism", "OP", &chain_icon("evm", 10), 10),
        ChainDescriptor::new("polygon", "Polygon", &chain_icon("evm", 137), 137),
        ChainDescriptor::new("hyperevm", "HyperEVM", &chain_icon("evm", 999), 999),
        ChainDescriptor::new("berachain", "Berachain", &chain_icon("evm", 80094), 80094),
        ChainDescriptor::new("linea", "Linea", &chain_icon("evm", 59144), 59144),
        ChainDescriptor::new("sonic", "Sonic", &chain_icon("evm", 146), 146),
        ChainDescriptor::new("merlin", "Merlin", &chain_icon("evm", 4200), 4200),
    ];
}

pub fn find_token<'a>(catalog: &'a [Token], token_id: &str) -> Option<&'a Token> {
    catalog.iter().find(|t| t.id == token_id)
}

pub fn find_chain<'a>(catalog: &'a [ChainDescriptor], chain_id: &str) -> Option<&'a ChainDescriptor> {
    catalog.iter().find(|c| c.id == chain_id)
}
