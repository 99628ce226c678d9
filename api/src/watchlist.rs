//! Adding pairs to and removing them from the server-side watchlist.

use crate::error::ApiError;
use crate::graphql::GraphQlRequest;
use crate::session::FetchPolicy;
use crate::session::Session;
use crate::token_pair::TokenPair;
use crate::token_pair::WatchlistStatus;
use crate::transport::Transport;
use dioxus_logger::tracing;
use serde::Deserialize;

/// The write a toggle click turns into.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs, strum::IntoStaticStr)]
pub enum WatchlistAction {
    Add,
    Remove,
}

impl WatchlistAction {
    /// A watched pair gets removed, anything else gets added.
    pub fn for_flag(is_on_watchlist: bool) -> Self {
        if is_on_watchlist {
            Self::Remove
        } else {
            Self::Add
        }
    }

    pub fn request(self, pair: &str) -> GraphQlRequest {
        match self {
            Self::Add => GraphQlRequest::add_to_watchlist(pair),
            Self::Remove => GraphQlRequest::remove_from_watchlist(pair),
        }
    }

    /// Label for the toggle button of a pair in the given state.
    pub fn button_label(is_on_watchlist: bool) -> &'static str {
        match Self::for_flag(is_on_watchlist) {
            Self::Remove => "★ Remove from Watchlist",
            Self::Add => "☆ Add to Watchlist",
        }
    }
}

#[derive(Deserialize)]
struct AddData {
    #[serde(rename = "addToWatchlist")]
    status: WatchlistStatus,
}

#[derive(Deserialize)]
struct RemoveData {
    #[serde(rename = "removeFromWatchlist")]
    status: WatchlistStatus,
}

pub async fn add_to_watchlist<T: Transport>(
    session: &Session<T>,
    pair: &str,
) -> Result<WatchlistStatus, ApiError> {
    let data: AddData = session.mutate(&WatchlistAction::Add.request(pair)).await?;
    Ok(data.status)
}

pub async fn remove_from_watchlist<T: Transport>(
    session: &Session<T>,
    pair: &str,
) -> Result<WatchlistStatus, ApiError> {
    let data: RemoveData = session.mutate(&WatchlistAction::Remove.request(pair)).await?;
    Ok(data.status)
}

/// Flips a pair's watch flag on the server, then re-reads the pairs.
///
/// The write is started first and the read right behind it; the read does
/// not wait for the write. `on_read` gets the read's result as soon as it
/// resolves, even while the write is still in flight. A failed write is
/// logged and otherwise dropped, so the delivered snapshot may still show
/// the old flag.
pub async fn toggle_and_refresh<T, F>(
    session: &Session<T>,
    pair: &str,
    is_on_watchlist: bool,
    pairs: &[String],
    on_read: F,
) where
    T: Transport,
    F: FnOnce(Result<Vec<TokenPair>, ApiError>),
{
    let action = WatchlistAction::for_flag(is_on_watchlist);

    let write = async {
        let result = match action {
            WatchlistAction::Add => add_to_watchlist(session, pair).await,
            WatchlistAction::Remove => remove_from_watchlist(session, pair).await,
        };
        if let Err(e) = result {
            let action: &'static str = action.into();
            tracing::warn!("watchlist {} for {} failed: {}", action, pair, e);
        }
    };
    let read = async {
        on_read(crate::fetch_token_pairs(session, pairs, FetchPolicy::NetworkOnly).await);
    };

    futures::join!(write, read);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::FakeServer;
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::time::Duration;

    fn default_pairs() -> Vec<String> {
        vec!["Sol/USDC".into(), "WIF/SOL".into(), "aura/sol".into()]
    }

    async fn toggle(
        session: &Session<FakeServer>,
        pair: &str,
        is_on_watchlist: bool,
        pairs: &[String],
    ) -> Result<Vec<TokenPair>, ApiError> {
        let delivered = RefCell::new(None);
        toggle_and_refresh(session, pair, is_on_watchlist, pairs, |result| {
            *delivered.borrow_mut() = Some(result);
        })
        .await;
        delivered.into_inner().expect("read result was never delivered")
    }

    fn server() -> FakeServer {
        FakeServer::with_pairs(&[("Sol/USDC", false), ("WIF/SOL", true), ("aura/sol", false)])
    }

    #[test]
    fn action_follows_the_current_flag() {
        assert_eq!(WatchlistAction::for_flag(true), WatchlistAction::Remove);
        assert_eq!(WatchlistAction::for_flag(false), WatchlistAction::Add);
        assert_eq!(WatchlistAction::button_label(true), "★ Remove from Watchlist");
        assert_eq!(WatchlistAction::button_label(false), "☆ Add to Watchlist");
    }

    #[tokio::test]
    async fn toggling_a_watched_pair_removes_then_refreshes() {
        let server = server();
        let session = Session::new(server.clone());

        let snapshot = toggle(&session, "WIF/SOL", true, &default_pairs())
            .await
            .unwrap();

        assert_eq!(server.operations(), vec!["RemoveFromWatchlist", "GetTokenPairs"]);
        assert_eq!(server.requests()[0].variables["pair"], "WIF/SOL");
        assert!(!snapshot.iter().find(|p| p.pair == "WIF/SOL").unwrap().is_on_watchlist);
    }

    #[tokio::test]
    async fn toggling_an_unwatched_pair_adds_then_refreshes() {
        let server = server();
        let session = Session::new(server.clone());

        toggle(&session, "aura/sol", false, &default_pairs())
            .await
            .unwrap();

        assert_eq!(server.operations(), vec!["AddToWatchlist", "GetTokenPairs"]);
        assert_eq!(server.requests()[0].variables["pair"], "aura/sol");
        assert_eq!(server.is_watched("aura/sol"), Some(true));
    }

    #[tokio::test]
    async fn failed_write_is_swallowed_and_the_refresh_still_happens() {
        let server = server();
        server.fail_writes(Some("watchlist service down"));
        let session = Session::new(server.clone());

        let snapshot = toggle(&session, "Sol/USDC", false, &default_pairs())
            .await
            .unwrap();

        assert_eq!(server.operations(), vec!["AddToWatchlist", "GetTokenPairs"]);
        assert!(!snapshot.iter().find(|p| p.pair == "Sol/USDC").unwrap().is_on_watchlist);
    }

    #[tokio::test]
    async fn fetch_toggle_refetch_reflects_the_servers_flag() {
        let server = server();
        let session = Session::new(server.clone());
        let pairs = default_pairs();

        let before = crate::fetch_token_pairs(&session, &pairs, FetchPolicy::CacheFirst)
            .await
            .unwrap();
        let sol = before.iter().find(|p| p.pair == "Sol/USDC").unwrap();
        assert!(!sol.is_on_watchlist);

        toggle(&session, &sol.pair, sol.is_on_watchlist, &pairs)
            .await
            .unwrap();
        let after = crate::fetch_token_pairs(&session, &pairs, FetchPolicy::NetworkOnly)
            .await
            .unwrap();

        assert!(after.iter().find(|p| p.pair == "Sol/USDC").unwrap().is_on_watchlist);
    }

    #[tokio::test(start_paused = true)]
    async fn refreshed_snapshot_arrives_while_a_slow_write_is_pending() {
        let server = server();
        server.delay_writes(Duration::from_secs(30));
        let session = Session::new(server.clone());
        let started = tokio::time::Instant::now();
        let read_at = Cell::new(None);

        toggle_and_refresh(&session, "aura/sol", false, &default_pairs(), |result| {
            assert_eq!(result.unwrap().len(), 3);
            read_at.set(Some(started.elapsed()));
        })
        .await;

        assert_eq!(read_at.get(), Some(Duration::ZERO));
        assert!(started.elapsed() >= Duration::from_secs(30));
        assert_eq!(server.operations(), vec!["AddToWatchlist", "GetTokenPairs"]);
        assert_eq!(server.is_watched("aura/sol"), Some(true));
    }

    #[tokio::test]
    async fn direct_mutations_echo_the_new_status() {
        let session = Session::new(server());

        let added = add_to_watchlist(&session, "aura/sol").await.unwrap();
        assert_eq!(
            added,
            WatchlistStatus {
                pair: "aura/sol".into(),
                is_on_watchlist: true
            }
        );

        let removed = remove_from_watchlist(&session, "aura/sol").await.unwrap();
        assert!(!removed.is_on_watchlist);
    }
}
