//! Shared building blocks for the dashboard's screens.
pub mod empty_state;
pub mod pair_card;
pub mod pico;
pub mod price_chart;
