use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use nb_core::{PostedRecord, PostedStore, Result};
use tokio::sync::RwLock;

/// Non-durable store for tests and dry runs.
#[derive(Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, PostedRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostedStore for MemoryStorage {
    async fn has_been_posted(&self, url: &str) -> Result<bool> {
        Ok(self.records.read().await.contains_key(url))
    }

    async fn mark_posted(&self, url: &str, source: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.entry(url.to_string()).or_insert_with(|| PostedRecord {
            url: url.to_string(),
            source: source.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn get(&self, url: &str) -> Result<Option<PostedRecord>> {
        Ok(self.records.read().await.get(url).cloned())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}
