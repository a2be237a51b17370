//! Shared error types for the services crate.

use thiserror::Error;

use skillup_core::model::CredentialsError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SessionManager`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Sign-in input was rejected. Session state is unchanged.
    #[error(transparent)]
    Validation(#[from] CredentialsError),
    /// A mutation was attempted without a signed-in user.
    #[error("no active session")]
    NoSession,
    /// The store rejected a write or delete. The mutation was not committed.
    #[error("failed to persist session: {0}")]
    Persistence(#[from] StorageError),
    #[error("failed to encode session: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
