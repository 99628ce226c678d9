//! What the pairs view is currently able to show.

use crate::error::ApiError;
use crate::token_pair::TokenPair;
use dioxus_logger::tracing;

/// Loading until the first response, then Ready or Errored depending on how
/// the most recent read ended.
#[derive(Debug, Clone, PartialEq, Default, strum::EnumIs)]
pub enum FetchState {
    #[default]
    Loading,
    Errored(String),
    Ready(Vec<TokenPair>),
}

impl FetchState {
    /// Applies the outcome of one read.
    ///
    /// Results are applied in the order they resolve, so whichever read
    /// finishes last decides what is shown. A success replaces the whole
    /// snapshot. A failure replaces the snapshot with the error text, even
    /// after earlier successes; the next scheduled refresh is the only retry.
    pub fn apply(&mut self, result: Result<Vec<TokenPair>, ApiError>) {
        *self = match result {
            Ok(pairs) => Self::Ready(pairs),
            Err(e) => {
                tracing::warn!("token pairs read failed: {}", e);
                Self::Errored(e.to_string())
            }
        };
    }

    pub fn pairs(&self) -> &[TokenPair] {
        match self {
            Self::Ready(pairs) => pairs,
            Self::Loading | Self::Errored(_) => &[],
        }
    }
}
