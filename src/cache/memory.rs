//! In-process TTL cache storing JSON snapshots, mirroring a KV store.

use super::SeriesCache;
use crate::domain::price_history::Series;
use crate::error::CacheError;
use async_lock::RwLock;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Entry {
    json: String,
    written_at: Instant,
    ttl: Duration,
}

impl Entry {
    fn is_live(&self) -> bool {
        self.written_at.elapsed() < self.ttl
    }
}

/// Shared in-memory cache. Clones share the same store.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. Expired ones linger until the next write.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SeriesCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Series>, CacheError> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.is_live() => Ok(Some(serde_json::from_str(&entry.json)?)),
            _ => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &Series, ttl_secs: u64) -> Result<(), CacheError> {
        let json = serde_json::to_string(value)?;
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.is_live());
        entries.insert(
            key.to_string(),
            Entry {
                json,
                written_at: Instant::now(),
                ttl: Duration::from_secs(ttl_secs),
            },
        );
        Ok(())
    }
}
