use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nb_core::{Error, PostedRecord, PostedStore, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS posted (
        url TEXT PRIMARY KEY,
        source TEXT,
        created_at TEXT
    )
    "#,
    // Add future migrations here
];

pub struct SQLiteStorage {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl SQLiteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Database(format!("Failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self {
            pool,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl PostedStore for SQLiteStorage {
    async fn has_been_posted(&self, url: &str) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM posted WHERE url = ?")
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to look up {}: {}", url, e)))?;

        Ok(row.is_some())
    }

    async fn mark_posted(&self, url: &str, source: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO posted (url, source, created_at) VALUES (?, ?, ?)")
            .bind(url)
            .bind(source)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to mark {} as posted: {}", url, e)))?;

        Ok(())
    }

    async fn get(&self, url: &str) -> Result<Option<PostedRecord>> {
        let row = sqlx::query("SELECT url, source, created_at FROM posted WHERE url = ?")
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to load {}: {}", url, e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let created_at = row
            .get::<Option<String>, _>("created_at")
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| Error::Database(format!("Missing or invalid created_at for {}", url)))?;

        Ok(Some(PostedRecord {
            url: row.get("url"),
            source: row.get::<Option<String>, _>("source").unwrap_or_default(),
            created_at,
        }))
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM posted")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to count posted links: {}", e)))?
            .get("n");

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_sqlite_storage() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let storage = SQLiteStorage::new_with_path(&db_path).await.unwrap();

        let url = "https://www.tourdom.ru/news/1";
        assert!(!storage.has_been_posted(url).await.unwrap());

        storage.mark_posted(url, "TourDom").await.unwrap();
        assert!(storage.has_been_posted(url).await.unwrap());

        let record = storage.get(url).await.unwrap().unwrap();
        assert_eq!(record.url, url);
        assert_eq!(record.source, "TourDom");
        assert!(record.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_mark_posted_twice_keeps_one_record() {
        let temp_dir = tempdir().unwrap();
        let storage = SQLiteStorage::new_with_path(&temp_dir.path().join("test.db")).await.unwrap();

        let url = "https://www.tourister.ru/publications/42";
        storage.mark_posted(url, "Tourister").await.unwrap();
        let first = storage.get(url).await.unwrap().unwrap();

        storage.mark_posted(url, "Other").await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 1);
        assert_eq!(storage.get(url).await.unwrap().unwrap(), first);
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("posted.db");

        {
            let storage = SQLiteStorage::new_with_path(&db_path).await.unwrap();
            storage.mark_posted("https://example.com/a", "Example").await.unwrap();
            storage.pool.close().await;
        }

        let reopened = SQLiteStorage::new_with_path(&db_path).await.unwrap();
        assert!(reopened.has_been_posted("https://example.com/a").await.unwrap());
        assert!(!reopened.has_been_posted("https://example.com/b").await.unwrap());
    }
}
