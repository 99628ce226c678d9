//! In-memory store of query results, shared by everything using one session.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Latest `data` object per query, keyed by operation name plus variables.
///
/// Entries are replaced wholesale on every successful network read. Nothing
/// expires; the cache lives exactly as long as the session that owns it.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stores `data` under `key`, dropping whatever was there before.
    pub async fn put(&self, key: String, data: Value) {
        self.entries.write().await.insert(key, data);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
