use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use api::FetchPolicy;
use api::FetchState;
use dioxus::prelude::*;

/// Handle for reading and refreshing the shared pairs snapshot.
///
/// Every read or write is spawned on the calling component's scope and
/// is not awaited by the caller. Results land in the `AppStateMut::pairs`
/// signal in the order they resolve.
#[derive(Clone)]
pub struct PairsFeed {
    app_state: AppState,
    pairs: Signal<FetchState>,
}

impl PairsFeed {
    pub fn state(&self) -> Signal<FetchState> {
        self.pairs
    }

    /// First load of a view. Served from the session cache when possible.
    pub fn load(&self) {
        self.read(FetchPolicy::CacheFirst);
    }

    /// Re-reads from the server, replacing whatever is shown.
    pub fn refetch(&self) {
        self.read(FetchPolicy::NetworkOnly);
    }

    /// Asks the server to flip `pair`'s watch flag, then re-reads.
    ///
    /// The displayed flag only changes once the re-read arrives. The re-read
    /// is applied as soon as it resolves, without waiting for the write.
    pub fn toggle_watchlist(&self, pair: String, is_on_watchlist: bool) {
        let app_state = self.app_state.clone();
        let mut pairs = self.pairs;
        spawn(async move {
            api::watchlist::toggle_and_refresh(
                &app_state.session,
                &pair,
                is_on_watchlist,
                &app_state.config.pairs,
                |result| pairs.with_mut(|state| state.apply(result)),
            )
            .await;
        });
    }

    fn read(&self, policy: FetchPolicy) {
        let app_state = self.app_state.clone();
        let mut pairs = self.pairs;
        spawn(async move {
            let result =
                api::fetch_token_pairs(&app_state.session, &app_state.config.pairs, policy).await;
            pairs.with_mut(|state| state.apply(result));
        });
    }
}

pub fn use_pairs_feed() -> PairsFeed {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    PairsFeed {
        app_state,
        pairs: app_state_mut.pairs,
    }
}
