//! Fixed-period refresh schedule.

use std::future::Future;
use std::time::Duration;

/// Calls `on_tick` once every `period`, forever, counting ticks from 1.
///
/// The first tick comes one full period after the call; the caller does the
/// initial load itself. `sleep` is the platform timer, so the same loop runs
/// under tokio and in the browser. Drop the future to stop it.
pub async fn run_periodic<S, Fut, F>(period: Duration, mut sleep: S, mut on_tick: F)
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(u64),
{
    let mut tick = 0u64;
    loop {
        sleep(period).await;
        tick += 1;
        on_tick(tick);
    }
}
