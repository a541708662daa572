use shared::api::error::ValidationError;
use thiserror::Error;

/// Failure of the storage engine itself, as opposed to bad input or a
/// missing workout
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("migration: {0}")]
    Migration(#[from] rusqlite_migration::Error),
    #[error("schema version {0} is outside of known schema migrations. Manual intervention required")]
    UnknownSchemaVersion(usize),
    #[error("workout {workout_id} has more than one entry with order index {order_index}")]
    DuplicateOrderIndex { workout_id: i64, order_index: i32 },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid workout: {0}")]
    Validation(#[from] ValidationError),
    #[error("workout {id} not found")]
    NotFound { id: i64 },
    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistenceError),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Persistence(err.into())
    }
}
