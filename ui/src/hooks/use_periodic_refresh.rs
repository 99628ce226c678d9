use dioxus::prelude::*;
use dioxus_logger::tracing;
use std::time::Duration;

/// Calls `on_tick` every `period` for as long as the calling component is
/// mounted.
///
/// The loop runs in a coroutine owned by the component's scope, so it is
/// dropped, and no further tick fires, when the component is torn down.
pub fn use_periodic_refresh(period: Duration, on_tick: impl FnMut() + Clone + 'static) {
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut on_tick = on_tick.clone();
        async move {
            api::refresh::run_periodic(period, crate::compat::sleep, move |tick| {
                tracing::debug!("refresh tick {}", tick);
                on_tick();
            })
            .await;
        }
    });
}
