pub mod use_pairs_feed;
pub mod use_periodic_refresh;
