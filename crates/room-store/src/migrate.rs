//! Schema migrations.
//!
//! Migrations are the SQL files under the workspace `migrations/` directory,
//! embedded at compile time. Applied versions are recorded in the
//! `_sqlx_migrations` table, so running them again is a no-op.

use sqlx::migrate::{MigrateDatabase, Migrator};
use sqlx::{PgPool, Postgres};

use crate::Result;

/// The embedded migration set.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies every migration not yet recorded in the database.
///
/// Each migration runs in its own transaction; on failure the database is
/// left at the last successfully applied version.
pub async fn run(pool: &PgPool) -> Result<()> {
    let latest = MIGRATOR.iter().map(|m| m.version).max();
    tracing::info!(
        available = MIGRATOR.iter().count(),
        latest_version = ?latest,
        "running migrations"
    );

    MIGRATOR.run(pool).await.inspect_err(|e| {
        tracing::error!(error = %e, "migration failed");
    })?;

    tracing::info!("migrations up to date");
    Ok(())
}

/// Returns the versions recorded as applied, in ascending order.
pub async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>> {
    let versions = sqlx::query_scalar::<_, i64>(
        "SELECT version FROM _sqlx_migrations WHERE success ORDER BY version ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(versions)
}

/// Creates the database named in `database_url` if it does not exist yet.
///
/// Returns `true` when the database was created.
pub async fn ensure_database(database_url: &str) -> Result<bool> {
    if Postgres::database_exists(database_url).await? {
        return Ok(false);
    }

    tracing::info!("database does not exist, creating it");
    Postgres::create_database(database_url).await?;
    Ok(true)
}
