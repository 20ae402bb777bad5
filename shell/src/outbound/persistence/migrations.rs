//! Embedded schema migrations.

use std::path::{Path, PathBuf};

use diesel::{Connection, ConnectionError, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing the database schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database at {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: ConnectionError,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    /// The blocking migration task was cancelled or panicked.
    #[error("migration task failed: {message}")]
    Task { message: String },
}

/// Create the database file if needed and apply pending migrations.
///
/// Runs on the blocking pool because the SQLite driver is synchronous.
pub async fn run_migrations(path: impl AsRef<Path>) -> Result<(), MigrationError> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || apply_pending(&path))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}

fn apply_pending(path: &Path) -> Result<(), MigrationError> {
    let mut conn = SqliteConnection::establish(&path.to_string_lossy()).map_err(|source| {
        MigrationError::Connect {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    info!(
        path = %path.display(),
        applied = applied.len(),
        "database schema up to date"
    );
    Ok(())
}
