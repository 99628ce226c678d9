use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::price_chart::PriceChart;
use api::chart::price_series;
use api::watchlist::WatchlistAction;
use api::TokenPair;
use dioxus::prelude::*;

/// One pair's figures, its watchlist toggle and its price chart.
///
/// `on_toggle` receives the pair identifier and the flag as currently shown.
#[component]
pub fn PairCard(pair: TokenPair, on_toggle: EventHandler<(String, bool)>) -> Element {
    let watched = pair.is_on_watchlist;
    let name = pair.pair.clone();
    let series = price_series(&pair.historical_price_data);
    let label = WatchlistAction::button_label(watched);

    rsx! {
        article {
            class: "pair-card",
            header {
                h2 { "{pair.pair}" }
            }
            dl {
                dt { "Price" }
                dd { "{pair.price}" }
                dt { "DEX" }
                dd { "{pair.dex}" }
                dt { "24-Hour Volume" }
                dd { "{pair.volume_24h}" }
                dt { "5-Minute Price Update" }
                dd { "{pair.price_update_5m}" }
                dt { "Liquidity" }
                dd { "{pair.liquidity}" }
            }
            Button {
                button_type: if watched { ButtonType::Primary } else { ButtonType::Secondary },
                outline: !watched,
                on_click: move |_| on_toggle.call((name.clone(), watched)),
                "{label}"
            }
            PriceChart { series }
        }
    }
}
