use std::path::PathBuf;

use rusqlite::{params, OptionalExtension};

use crate::domain::entities::row::Row;
use crate::infra::storage::schema::{init_db, open_connection};
use crate::usecase::ports::repo::{SnapshotRepository, StoreError};

/// Storage key for the persisted row collection, kept identical to the key
/// the browser build of this tool used.
pub const SNAPSHOT_KEY: &str = "organogram-data";

/// Single-key snapshot persistence backed by sqlite: the whole row
/// collection is serialized to JSON and stored under [`SNAPSHOT_KEY`].
pub struct SqliteSnapshotStore {
    pub db_path: PathBuf,
}

impl SqliteSnapshotStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl SnapshotRepository for SqliteSnapshotStore {
    fn init(&self) -> Result<(), StoreError> {
        init_db(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))
    }

    fn load(&self) -> Result<Option<Vec<Row>>, StoreError> {
        let conn =
            open_connection(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))?;
        let serialized: Option<String> = conn
            .query_row(
                "SELECT value FROM snapshot WHERE key = ?1",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| StoreError::Message(err.to_string()))?;

        let Some(serialized) = serialized else {
            return Ok(None);
        };

        // Corrupted content is treated as absent, not as a failure.
        match serde_json::from_str(&serialized) {
            Ok(rows) => Ok(Some(rows)),
            Err(err) => {
                log::warn!("discarding corrupted snapshot: {err}");
                Ok(None)
            }
        }
    }

    fn save(&self, rows: &[Row]) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(rows).map_err(|err| StoreError::Message(err.to_string()))?;
        let conn =
            open_connection(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))?;
        conn.execute(
            "INSERT INTO snapshot(key, value, saved_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, saved_at = excluded.saved_at",
            params![SNAPSHOT_KEY, serialized],
        )
        .map_err(|err| StoreError::Message(err.to_string()))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let conn =
            open_connection(&self.db_path).map_err(|err| StoreError::Message(err.to_string()))?;
        conn.execute(
            "DELETE FROM snapshot WHERE key = ?1",
            params![SNAPSHOT_KEY],
        )
        .map_err(|err| StoreError::Message(err.to_string()))?;
        Ok(())
    }
}
