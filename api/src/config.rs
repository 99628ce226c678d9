use std::env;
use std::time::Duration;

/// Where the dashboard reads from and how often.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub refresh_interval: Duration,
    pub pairs: Vec<String>,
}

impl DashboardConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "http://216.146.25.42:4000/graphql";
    pub const DEFAULT_REFRESH_SECS: u64 = 60;
    pub const DEFAULT_PAIRS: [&'static str; 3] = ["Sol/USDC", "WIF/SOL", "aura/sol"];

    /// Builds the config from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `TOKEN_PAIRS_GRAPHQL_URL`: GraphQL endpoint.
    /// - `TOKEN_PAIRS_REFRESH_SECS`: seconds between refreshes. Zero is ignored.
    /// - `TOKEN_PAIRS`: comma separated pair identifiers.
    ///
    /// Browsers have no process environment, so wasm builds get the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("TOKEN_PAIRS_GRAPHQL_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_string());

        let refresh_secs = lookup("TOKEN_PAIRS_REFRESH_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(Self::DEFAULT_REFRESH_SECS);

        let pairs: Vec<String> = lookup("TOKEN_PAIRS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            endpoint,
            refresh_interval: Duration::from_secs(refresh_secs),
            pairs: if pairs.is_empty() {
                Self::default_pairs()
            } else {
                pairs
            },
        }
    }

    fn default_pairs() -> Vec<String> {
        Self::DEFAULT_PAIRS.iter().map(|p| p.to_string()).collect()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            refresh_interval: Duration::from_secs(Self::DEFAULT_REFRESH_SECS),
            pairs: Self::default_pairs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(lookup(&[]));

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.pairs, vec!["Sol/USDC", "WIF/SOL", "aura/sol"]);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("TOKEN_PAIRS_GRAPHQL_URL", "https://example.org/graphql"),
            ("TOKEN_PAIRS_REFRESH_SECS", "15"),
            ("TOKEN_PAIRS", " BONK/SOL , ,JUP/USDC"),
        ]));

        assert_eq!(config.endpoint, "https://example.org/graphql");
        assert_eq!(config.refresh_interval, Duration::from_secs(15));
        assert_eq!(config.pairs, vec!["BONK/SOL", "JUP/USDC"]);
    }

    #[test]
    fn unusable_values_fall_back() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("TOKEN_PAIRS_GRAPHQL_URL", "  "),
            ("TOKEN_PAIRS_REFRESH_SECS", "0"),
            ("TOKEN_PAIRS", ",,"),
        ]));
        assert_eq!(config, DashboardConfig::default());

        let config = DashboardConfig::from_lookup(lookup(&[("TOKEN_PAIRS_REFRESH_SECS", "soon")]));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }
}
