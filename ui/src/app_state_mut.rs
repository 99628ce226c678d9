//! Defines the mutable, reactive state for the application's UI.

use api::FetchState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Components that read these signals are re-rendered whenever a new read
/// result is applied. It is separate from the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The latest pairs snapshot, or why there is none.
    pub pairs: Signal<FetchState>,
}
