use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::entity::{ChainDescriptor, Token};

/// Which destination chains a token can be received on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainRule {
    /// Every chain except the listed chain ids
    Exclude(&'static [&'static str]),
    /// Only the listed chain ids
    Only(&'static [&'static str]),
}

impl ChainRule {
    pub fn allows(&self, chain: &ChainDescriptor) -> bool {
        match self {
            Self::Exclude(ids) => !ids.contains(&chain.id.as_str()),
            Self::Only(ids) => ids.contains(&chain.id.as_str()),
        }
    }
}

lazy_static! {
    /// Per-token rules, keyed by token id. Tokens missing here settle on every chain.
    pub static ref CHAIN_RULES: HashMap<&'static str, ChainRule> = {
        let mut rules = HashMap::new();
        rules.insert("usdc", ChainRule::Exclude(&["hyperevm", "merlin"]));
        rules.insert("usdt", ChainRule::Exclude(&["base", "sonic", "berachain"]));
        rules.insert(
            "btc",
            ChainRule::Exclude(&["solana", "hyperevm", "sonic", "berachain"]),
        );
        rules.insert(
            "eth",
            ChainRule::Exclude(&["solana", "hyperevm", "sonic", "berachain", "merlin"]),
        );
        rules.insert("bnb", ChainRule::Only(&["bnb"]));
        rules
    };
}

pub fn rule_for(token_id: &str) -> Option<ChainRule> {
    CHAIN_RULES.get(token_id).copied()
}

/// Chains `token` can be received on, in catalog order.
pub fn eligible_chains(token: &Token, catalog: &[ChainDescriptor]) -> Vec<ChainDescriptor> {
    match rule_for(&token.id) {
        Some(rule) => catalog.iter().filter(|c| rule.allows(c)).cloned().collect(),
        None => catalog.to_vec(),
    }
}

pub fn is_eligible(token: &Token, chain: &ChainDescriptor) -> bool {
    rule_for(&token.id).map_or(true, |rule| rule.allows(chain))
}

/// Chain preselected for a token: the first eligible one.
pub fn default_chain(token: &Token, catalog: &[ChainDescriptor]) -> Option<ChainDescriptor> {
    catalog.iter().find(|c| is_eligible(token, c)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{find_token, CHAIN_CATALOG, TOKEN_CATALOG};

    fn token(id: &str) -> Token {
        find_token(&TOKEN_CATALOG, id).unwrap().clone()
    }

    fn ids(chains: &[ChainDescriptor]) -> Vec<&str> {
        chains.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn usdc_excludes_exactly_its_two_chains() {
        let chains = eligible_chains(&token("usdc"), &CHAIN_CATALOG);

        assert_eq!(chains.len(), CHAIN_CATALOG.len() - 2);
        assert!(!ids(&chains).contains(&"hyperevm"));
        assert!(!ids(&chains).contains(&"merlin"));
    }

    #[test]
    fn usdt_excludes_exactly_its_three_chains() {
        let chains = eligible_chains(&token("usdt"), &CHAIN_CATALOG);

        assert_eq!(chains.len(), CHAIN_CATALOG.len() - 3);
        for excluded in ["base", "sonic", "berachain"] {
            assert!(!ids(&chains).contains(&excluded));
        }
    }

    #[test]
    fn eth_and_btc_keep_catalog_order() {
        let eth = eligible_chains(&token("eth"), &CHAIN_CATALOG);
        assert_eq!(
            ids(&eth),
            vec!["ethereum", "bnb", "base", "arbitrum", "avalanche", "optimism", "polygon", "linea"]
        );

        let btc = eligible_chains(&token("btc"), &CHAIN_CATALOG);
        assert_eq!(
            ids(&btc),
            vec![
                "ethereum", "bnb", "base", "arbitrum", "avalanche", "optimism", "polygon",
                "linea", "merlin"
            ]
        );
    }

    #[test]
    fn native_token_is_restricted_to_home_chain() {
        let chains = eligible_chains(&token("bnb"), &CHAIN_CATALOG);
        assert_eq!(ids(&chains), vec!["bnb"]);
    }

    #[test]
    fn token_without_rule_gets_full_catalog() {
        let sol = eligible_chains(&token("sol"), &CHAIN_CATALOG);
        assert_eq!(sol, CHAIN_CATALOG.to_vec());

        let parti = eligible_chains(&token("parti"), &CHAIN_CATALOG);
        assert_eq!(parti, CHAIN_CATALOG.to_vec());
    }

    #[test]
    fn is_eligible_agrees_with_eligible_chains() {
        for t in TOKEN_CATALOG.iter() {
            let eligible = eligible_chains(t, &CHAIN_CATALOG);
            for chain in CHAIN_CATALOG.iter() {
                assert_eq!(is_eligible(t, chain), eligible.contains(chain));
            }
        }
    }

    #[test]
    fn default_chain_is_first_eligible() {
        assert_eq!(default_chain(&token("eth"), &CHAIN_CATALOG).unwrap().id, "ethereum");
        assert_eq!(default_chain(&token("usdc"), &CHAIN_CATALOG).unwrap().id, "solana");
        assert_eq!(default_chain(&token("bnb"), &CHAIN_CATALOG).unwrap().id, "bnb");
    }
}
