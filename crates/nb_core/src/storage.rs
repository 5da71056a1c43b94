use async_trait::async_trait;
use crate::types::PostedRecord;
use crate::Result;

/// Persistent record of links that were already published.
#[async_trait]
pub trait PostedStore: Send + Sync {
    /// Returns true if the link has a posted record
    async fn has_been_posted(&self, url: &str) -> Result<bool>;

    /// Records the link with the current UTC time.
    /// Repeated calls for the same link are a silent no-op.
    async fn mark_posted(&self, url: &str, source: &str) -> Result<()>;

    /// Fetches the stored record for a link
    async fn get(&self, url: &str) -> Result<Option<PostedRecord>>;

    /// Number of posted records
    async fn count(&self) -> Result<u64>;
}
