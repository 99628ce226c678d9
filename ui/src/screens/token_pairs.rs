//=============================================================================
// File: src/screens/token_pairs.rs
//=============================================================================
use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pair_card::PairCard;
use crate::components::pico::Card;
use crate::components::pico::SearchInput;
use crate::hooks::use_pairs_feed::use_pairs_feed;
use crate::hooks::use_periodic_refresh::use_periodic_refresh;
use api::search::filter_pairs;
use api::FetchState;
use dioxus::prelude::*;

#[component]
pub fn TokenPairsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let feed = use_pairs_feed();
    let search = use_signal(String::new);

    let loader = feed.clone();
    use_hook(move || loader.load());

    // refetch from the server every N secs while this screen is mounted
    let ticker = feed.clone();
    use_periodic_refresh(app_state.config.refresh_interval, move || ticker.refetch());

    let state = feed.state();

    rsx! {
        match &*state.read() {
            FetchState::Loading => rsx! {
                Card {
                    h3 { "Token Pairs" }
                    p { "Loading..." }
                    progress {}
                }
            },
            FetchState::Errored(e) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Error: {e}" }
                }
            },
            FetchState::Ready(pairs) => {
                let visible = filter_pairs(pairs, &search.read());
                let query = search.read().clone();

                rsx! {
                    Card {
                        h3 { "Token Pairs" }
                        SearchInput {
                            value: search,
                            placeholder: "Search token pairs",
                        }
                        if visible.is_empty() {
                            EmptyState {
                                title: "No matching pairs",
                                description: format!("Nothing matches \"{query}\"."),
                                icon: rsx! { "🔍" },
                            }
                        }
                        {visible.into_iter().map(|pair| {
                            let feed = feed.clone();
                            rsx! {
                                PairCard {
                                    key: "{pair.pair}",
                                    pair: pair.clone(),
                                    on_toggle: move |(name, watched): (String, bool)| {
                                        feed.toggle_watchlist(name, watched)
                                    },
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
