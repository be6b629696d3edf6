use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;

use crate::domain::entities::external::ExternalRecord;
use crate::domain::reconcile::{self, ImportStats};
use crate::infra::import::external::{fetch_external_csv, read_external_csv};
use crate::usecase::services::row_store::RowStore;

/// How many records the preview dialog shows.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPreview {
    pub sample: Vec<ExternalRecord>,
    pub stats: ImportStats,
}

/// Runs the external-CSV import pipeline: load, reconcile, merge into the
/// store. Only one operation may be in flight at a time; a second request
/// is rejected rather than racing the first.
#[derive(Default)]
pub struct ImportService {
    in_flight: AtomicBool,
}

impl ImportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the source and reports the first few records plus the counts a
    /// full import would produce. Nothing is mutated and no ids are
    /// allocated.
    pub fn preview(&self, source: &ImportSource, store: &RowStore) -> Result<ImportPreview> {
        let _guard = self.begin()?;
        let externals = load_source(source)?;
        let stats = reconcile::plan(&externals, store.rows().unwrap_or(&[]));
        let sample = externals.into_iter().take(PREVIEW_ROWS).collect();
        Ok(ImportPreview { sample, stats })
    }

    /// Loads the source, reconciles it against the store and merges the
    /// outcome. Failures leave the store untouched.
    pub fn import(
        &self,
        source: &ImportSource,
        store: &mut RowStore,
        parent_id: Option<&str>,
    ) -> Result<ImportStats> {
        let _guard = self.begin()?;
        let externals = load_source(source)?;

        let existing: Vec<_> = store.rows().unwrap_or(&[]).to_vec();
        let stats = reconcile::plan(&externals, &existing);
        let outcome = reconcile::reconcile(&externals, &existing, store.last_id(), parent_id);
        store.apply_import(&outcome);
        Ok(stats)
    }

    fn begin(&self) -> Result<FlightGuard<'_>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            anyhow::bail!("an import is already in progress");
        }
        Ok(FlightGuard(&self.in_flight))
    }
}

/// Clears the in-flight flag on every exit path, including errors.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn load_source(source: &ImportSource) -> Result<Vec<ExternalRecord>> {
    match source {
        ImportSource::Url(url) => fetch_external_csv(url),
        ImportSource::File(path) => read_external_csv(path),
    }
}
