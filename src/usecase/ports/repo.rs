use crate::domain::entities::row::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Message(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence boundary for the row collection: one snapshot, saved and
/// loaded whole. `load` returning `Ok(None)` means no data yet (including a
/// corrupted snapshot, which implementations discard rather than surface).
pub trait SnapshotRepository: Send + Sync {
    fn init(&self) -> Result<(), StoreError>;
    fn load(&self) -> Result<Option<Vec<Row>>, StoreError>;
    fn save(&self, rows: &[Row]) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}
