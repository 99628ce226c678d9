//! The one network client shared by the whole dashboard.

use crate::cache::ResponseCache;
use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::graphql;
use crate::graphql::GraphQlRequest;
use crate::transport::HttpTransport;
use crate::transport::Transport;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

/// How a query may use the response cache.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum FetchPolicy {
    /// Answer from the cache when an entry exists, otherwise hit the network.
    #[default]
    CacheFirst,
    /// Always hit the network.
    NetworkOnly,
}

/// A transport plus the response cache that goes with it.
///
/// Constructed once at startup and handed to every consumer by reference.
/// The cache is the only part that changes after construction.
#[derive(Debug, Clone)]
pub struct Session<T = HttpTransport> {
    transport: T,
    cache: ResponseCache,
}

impl Session<HttpTransport> {
    pub fn connect(config: &DashboardConfig) -> Self {
        tracing::info!("graphql session bound to {}", config.endpoint);
        Self::new(HttpTransport::new(&config.endpoint))
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }
}

impl<T: Transport> Session<T> {
    /// Creates a session with a fresh, empty cache.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: ResponseCache::new(),
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Runs a read. Successful network results replace the cache entry for
    /// the same operation and variables.
    pub async fn query<D: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
        policy: FetchPolicy,
    ) -> Result<D, ApiError> {
        let key = request.cache_key();

        if policy.is_cache_first() {
            if let Some(data) = self.cache.get(&key).await {
                tracing::debug!("cache hit for {}", request.operation_name);
                return graphql::decode(data);
            }
        }

        let data = graphql::extract_data(self.transport.execute(request).await?)?;
        let decoded = graphql::decode(data.clone())?;
        self.cache.put(key, data).await;
        Ok(decoded)
    }

    /// Runs a write. Mutation results are never cached.
    pub async fn mutate<D: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<D, ApiError> {
        let data = graphql::extract_data(self.transport.execute(request).await?)?;
        graphql::decode(data)
    }
}
