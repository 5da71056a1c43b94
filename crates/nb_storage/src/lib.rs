use std::path::Path;
use std::sync::Arc;

use nb_core::{Error, PostedStore, Result};

pub mod backends;

pub use backends::*;

/// Default location of the SQLite database, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "posted.db";

/// Opens the deduplication store named by `kind` (`sqlite` or `memory`).
pub async fn create_storage(kind: &str, db_path: &Path) -> Result<Arc<dyn PostedStore>> {
    match kind {
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let storage = SQLiteStorage::new_with_path(db_path).await?;
            tracing::info!("Using SQLite store at {}", storage.get_db_path().display());
            Ok(Arc::new(storage))
        }
        "memory" => {
            tracing::warn!("Using in-memory store, posted links are lost on restart");
            Ok(Arc::new(MemoryStorage::new()))
        }
        other => Err(Error::Config(format!("Unknown storage backend: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_memory() {
        let storage = create_storage("memory", Path::new("unused.db")).await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_create_sqlite() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("posted.db");
        let storage = create_storage("sqlite", &db_path).await.unwrap();
        storage.mark_posted("https://example.com/1", "Example").await.unwrap();
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_unknown_backend() {
        let result = create_storage("qdrant", Path::new("x")).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
