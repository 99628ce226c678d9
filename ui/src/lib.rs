// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::DashboardConfig;
use api::FetchState;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::token_pairs::TokenPairsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header nav {
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-main-container .endpoint {
        color: var(--pico-muted-color);
        font-family: var(--pico-font-family-monospace);
    }

    /* --- PAIR CARDS --- */
    .pair-card dl {
        display: grid;
        grid-template-columns: max-content 1fr;
        column-gap: 1rem;
        row-gap: 0.25rem;
    }
    .pair-card dt { font-weight: bold; }
    .pair-card dd { margin: 0; }
    .pair-card figure svg { display: block; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{dashboard_css}"
        }
        AppBody {}
    }
}

/// Builds the shared session once and mounts the dashboard under it.
#[component]
fn AppBody() -> Element {
    // One session for the life of the process, handed to every descendant.
    let app_state = use_context_provider(|| AppState::new(DashboardConfig::from_env()));

    let pairs_signal = use_signal(FetchState::default);
    use_context_provider(|| AppStateMut {
        pairs: pairs_signal,
    });

    let endpoint = app_state.session.endpoint().to_string();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Token Pairs" }
                            }
                        }
                        ul {
                            li {
                                small { class: "endpoint", "{endpoint}" }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    TokenPairsScreen {}
                }
            }
        }
    }
}
