use crate::token_pair::TokenPair;

/// Pairs whose identifier contains `search`, ignoring case, in their
/// original order. An empty search matches everything.
pub fn filter_pairs<'a>(pairs: &'a [TokenPair], search: &str) -> Vec<&'a TokenPair> {
    let needle = search.to_lowercase();
    pairs
        .iter()
        .filter(|pair| pair.pair.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_pair::Liquidity;

    fn pair(name: &str, watched: bool) -> TokenPair {
        TokenPair {
            pair: name.to_string(),
            price: 1.0,
            dex: "Raydium".to_string(),
            volume_24h: 0.0,
            price_update_5m: 0.0,
            historical_price_data: vec![],
            liquidity: Liquidity::Amount(0.0),
            is_on_watchlist: watched,
        }
    }

    fn names<'a>(pairs: &[&'a TokenPair]) -> Vec<&'a str> {
        pairs.iter().map(|p| p.pair.as_str()).collect()
    }

    fn default_snapshot() -> Vec<TokenPair> {
        vec![
            pair("Sol/USDC", false),
            pair("WIF/SOL", true),
            pair("aura/sol", false),
        ]
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let pairs = default_snapshot();
        assert_eq!(filter_pairs(&pairs, ""), pairs.iter().collect::<Vec<_>>());
    }

    #[test]
    fn sol_matches_all_mixed_case_identifiers() {
        let pairs = default_snapshot();
        assert_eq!(
            names(&filter_pairs(&pairs, "sol")),
            vec!["Sol/USDC", "WIF/SOL", "aura/sol"]
        );
        assert_eq!(names(&filter_pairs(&pairs, "SOL")).len(), 3);
    }

    #[test]
    fn matches_anywhere_not_just_the_prefix() {
        let pairs = default_snapshot();
        assert_eq!(names(&filter_pairs(&pairs, "usd")), vec!["Sol/USDC"]);
        assert_eq!(names(&filter_pairs(&pairs, "F/s")), vec!["WIF/SOL"]);
        assert_eq!(names(&filter_pairs(&pairs, "/")).len(), 3);
    }

    #[test]
    fn no_match_yields_nothing() {
        let pairs = default_snapshot();
        assert!(filter_pairs(&pairs, "bonk").is_empty());
        assert!(filter_pairs(&[], "").is_empty());
    }

    #[test]
    fn result_is_exactly_the_lowercase_substring_set() {
        let pairs = vec![
            pair("JUP/USDC", false),
            pair("jupSOL/SOL", false),
            pair("PYTH/USDT", false),
        ];
        for search in ["", "j", "JUP", "sol", "usd", "t/u", "zzz"] {
            let expected: Vec<&str> = pairs
                .iter()
                .filter(|p| p.pair.to_lowercase().contains(&search.to_lowercase()))
                .map(|p| p.pair.as_str())
                .collect();
            assert_eq!(names(&filter_pairs(&pairs, search)), expected, "search {search:?}");
        }
    }
}
