use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::domain::entities::row::Row;
use crate::domain::reconcile::{self, ReconcileOutcome};
use crate::infra::csv::{reader, writer};
use crate::usecase::ports::repo::SnapshotRepository;

/// Canonical row collection plus its persistence side effect. `None` means
/// nothing has been uploaded yet. Every mutation replaces the collection
/// wholesale and then persists fire-and-forget: a storage failure is logged
/// and the in-memory state stands.
pub struct RowStore {
    repo: Arc<dyn SnapshotRepository>,
    rows: Option<Vec<Row>>,
    storage_available: bool,
    last_saved: Option<DateTime<Local>>,
}

impl RowStore {
    /// Probes the snapshot store and loads any saved collection. A storage
    /// that cannot initialize or load degrades to the unpersisted mode
    /// instead of blocking editing.
    pub fn open(repo: Arc<dyn SnapshotRepository>) -> Self {
        let storage_available = match repo.init() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("snapshot store unavailable: {err}");
                false
            }
        };

        let rows = if storage_available {
            match repo.load() {
                Ok(rows) => rows,
                Err(err) => {
                    log::warn!("failed to load snapshot: {err}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            repo,
            rows,
            storage_available,
            last_saved: None,
        }
    }

    pub fn rows(&self) -> Option<&[Row]> {
        self.rows.as_deref()
    }

    pub fn storage_available(&self) -> bool {
        self.storage_available
    }

    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// Replaces the collection wholesale and persists the new snapshot.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = Some(rows);
        self.persist();
    }

    /// Loads an uploaded organogram CSV, replacing whatever is held.
    pub fn load_organogram_csv(&mut self, text: &str) {
        self.replace(reader::parse_rows(text));
    }

    pub fn export_csv(&self) -> Option<String> {
        self.rows.as_deref().map(writer::generate)
    }

    /// Appends a row under the next free id and returns that id. The
    /// caller-provided id on `row` is ignored.
    pub fn add_row(&mut self, mut row: Row) -> String {
        let id = (self.last_id() + 1).to_string();
        row.id = id.clone();
        let mut rows = self.rows.take().unwrap_or_default();
        rows.push(row);
        self.replace(rows);
        id
    }

    /// Replaces the row with the same id. Returns false when no row matches.
    pub fn update_row(&mut self, updated: Row) -> bool {
        let Some(rows) = self.rows.as_mut() else {
            return false;
        };
        let Some(slot) = rows.iter_mut().find(|row| row.id == updated.id) else {
            return false;
        };
        *slot = updated;
        self.persist();
        true
    }

    pub fn delete_row(&mut self, id: &str) -> bool {
        let Some(rows) = self.rows.as_mut() else {
            return false;
        };
        let before = rows.len();
        rows.retain(|row| row.id != id);
        let removed = rows.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Drops the collection and clears the stored snapshot.
    pub fn clear(&mut self) {
        self.rows = None;
        if self.storage_available {
            if let Err(err) = self.repo.clear() {
                log::warn!("failed to clear snapshot: {err}");
            }
        }
    }

    /// Highest numeric id in the collection; ids that fail to parse count
    /// as zero, so new allocations stay clear of every parseable id.
    pub fn last_id(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .map(|row| row.id.parse::<u64>().unwrap_or(0))
            .max()
            .unwrap_or(0)
    }

    /// (id, title) pairs for parent selection.
    pub fn parent_options(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .flatten()
            .map(|row| {
                (
                    row.id.clone(),
                    row.title.clone().unwrap_or_default(),
                )
            })
            .collect()
    }

    /// Merges a reconciliation outcome into the collection.
    pub fn apply_import(&mut self, outcome: &ReconcileOutcome) {
        let merged = reconcile::apply(self.rows.as_deref().unwrap_or(&[]), outcome);
        self.replace(merged);
    }

    fn persist(&mut self) {
        if !self.storage_available {
            return;
        }
        let Some(rows) = self.rows.as_deref() else {
            return;
        };
        match self.repo.save(rows) {
            Ok(()) => self.last_saved = Some(Local::now()),
            Err(err) => log::warn!("failed to persist snapshot: {err}"),
        }
    }
}
