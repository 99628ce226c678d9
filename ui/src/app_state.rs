use api::DashboardConfig;
use api::Session;
use dioxus_logger::tracing;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub config: DashboardConfig,
    pub session: Session,
}

/// The stable, non-reactive state of the app: settings plus the one network
/// session every component shares. Built once at startup.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        tracing::info!(
            "tracking {} pairs, refreshing every {:?}",
            config.pairs.len(),
            config.refresh_interval
        );
        let session = Session::connect(&config);
        Self(Arc::new(AppStateData { config, session }))
    }
}
