//! SQLite-backed directory via libsql.
//!
//! One `meetings` table keyed by (partition_key, id) = (group, alias).
//! The primary key is the uniqueness constraint that decides concurrent creates:
//! inserts use ON CONFLICT DO NOTHING and a zero row count means the key was taken.
//! Database file: data/meetings.db

use crate::domain::{DomainError, MeetingEntry};
use crate::ports::Directory;
use libsql::{Connection, Database, params};
use std::path::Path;
use tracing::info;

const MEETINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS meetings (
    partition_key TEXT NOT NULL,
    id TEXT NOT NULL,
    code TEXT NOT NULL,
    PRIMARY KEY (partition_key, id)
)"#;

const DB_FILE: &str = "meetings.db";

fn storage_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// SQLite directory. Safe to share via Arc; each call opens its own connection.
pub struct SqliteDirectory {
    db: Database,
}

impl SqliteDirectory {
    /// Connect to (or create) the database in `base_dir` and ensure the schema exists.
    /// WAL mode lets concurrent requests read while one writes.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(storage_err)?;
        let db_path = base.join(DB_FILE);
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(storage_err)?;
        let conn = db.connect().map_err(storage_err)?;

        // PRAGMA journal_mode returns a row; consume it (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Storage(format!("WAL pragma failed: {}", e)))?;
        while wal_rows.next().await.map_err(storage_err)?.is_some() {}

        conn.execute(MEETINGS_TABLE, ()).await.map_err(storage_err)?;

        info!(path = %db_path.display(), "SQLite directory ready");

        Ok(Self { db })
    }

    fn conn(&self) -> Result<Connection, DomainError> {
        self.db.connect().map_err(storage_err)
    }
}

#[async_trait::async_trait]
impl Directory for SqliteDirectory {
    async fn get(&self, group: &str, alias: &str) -> Result<Option<MeetingEntry>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT code FROM meetings WHERE partition_key = ?1 AND id = ?2",
                params![group, alias],
            )
            .await
            .map_err(storage_err)?;

        match rows.next().await.map_err(storage_err)? {
            Some(row) => {
                let code: String = row.get(0).map_err(storage_err)?;
                Ok(Some(MeetingEntry::new(group, alias, code)))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError> {
        let conn = self.conn()?;
        let inserted = conn
            .execute(
                r#"
                INSERT INTO meetings (partition_key, id, code)
                VALUES (?1, ?2, ?3)
                ON CONFLICT (partition_key, id) DO NOTHING
                "#,
                params![group, alias, code],
            )
            .await
            .map_err(storage_err)?;

        if inserted == 0 {
            return Err(DomainError::AlreadyExists {
                group: group.to_string(),
                alias: alias.to_string(),
            });
        }
        Ok(())
    }

    async fn update(&self, group: &str, alias: &str, code: &str) -> Result<(), DomainError> {
        let conn = self.conn()?;
        let updated = conn
            .execute(
                "UPDATE meetings SET code = ?3 WHERE partition_key = ?1 AND id = ?2",
                params![group, alias, code],
            )
            .await
            .map_err(storage_err)?;

        if updated == 0 {
            return Err(DomainError::NotFound {
                group: group.to_string(),
                alias: alias.to_string(),
            });
        }
        Ok(())
    }
}
