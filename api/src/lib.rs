//! This crate holds everything the token-pairs dashboard does that is not
//! markup: the GraphQL session, the data model, search, chart shaping, the
//! fetch state machine and the refresh schedule.

pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetch_state;
pub mod graphql;
pub mod refresh;
pub mod search;
pub mod session;
pub mod token_pair;
pub mod transport;
pub mod watchlist;

use serde::Deserialize;
use serde::Serialize;

pub use config::DashboardConfig;
pub use error::ApiError;
pub use fetch_state::FetchState;
pub use graphql::GraphQlRequest;
pub use session::FetchPolicy;
pub use session::Session;
pub use token_pair::HistoricalPricePoint;
pub use token_pair::Liquidity;
pub use token_pair::TokenPair;
pub use token_pair::WatchlistStatus;
pub use transport::HttpTransport;
pub use transport::Transport;

/// The `data` object of a `GetTokenPairs` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPairsData {
    #[serde(rename = "tokenPairs")]
    pub token_pairs: Vec<TokenPair>,
}

/// Reads the current snapshot for `pairs`.
pub async fn fetch_token_pairs<T: Transport>(
    session: &Session<T>,
    pairs: &[String],
    policy: FetchPolicy,
) -> Result<Vec<TokenPair>, ApiError> {
    let data: TokenPairsData = session
        .query(&GraphQlRequest::token_pairs(pairs), policy)
        .await?;
    Ok(data.token_pairs)
}
