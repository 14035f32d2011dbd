use thiserror::Error;

/// Errors that can occur when interacting with the room store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached or a query failed.
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// A schema migration could not be applied.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A room failed validation before reaching the database.
    #[error("Invalid room: {0}")]
    InvalidRoom(String),
}

/// Result type for room store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
