//! Embedded schema migrations.
//!
//! The forward path creates tables in dependency order (referenced tables
//! before referencing tables); the reverse path drops them in strict reverse
//! order so foreign-key enforcement never rejects a drop. Constraint errors
//! from the storage engine propagate unmodified.

use sqlx::{
    PgPool,
    migrate::{MigrateError, Migrator},
    query_scalar,
};
use tracing::info;

/// All migrations under `migrations/`, compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration.
///
/// Already-applied versions are skipped via the migration ledger; re-running
/// against an up-to-date database is a no-op.
///
/// # Errors
///
/// Returns an error when a migration statement fails or a previously applied
/// migration's checksum no longer matches.
pub async fn apply(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    info!("applied pending migrations");

    Ok(())
}

/// Revert applied migrations down to (and keeping) `target`.
///
/// # Errors
///
/// Returns an error when a down-migration statement fails.
pub async fn revert_to(pool: &PgPool, target: i64) -> Result<(), MigrateError> {
    MIGRATOR.undo(pool, target).await?;

    info!(target, "reverted migrations");

    Ok(())
}

/// Revert every applied migration, dropping all tables in reverse order.
///
/// # Errors
///
/// Returns an error when a down-migration statement fails.
pub async fn revert_all(pool: &PgPool) -> Result<(), MigrateError> {
    revert_to(pool, 0).await
}

/// Versions recorded in the migration ledger, oldest first.
///
/// Returns an empty list when the ledger table itself does not exist yet.
///
/// # Errors
///
/// Returns an error when querying the ledger fails.
pub async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
    let ledger_exists: bool = query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
        .fetch_one(pool)
        .await?;

    if !ledger_exists {
        return Ok(Vec::new());
    }

    query_scalar("SELECT version FROM _sqlx_migrations ORDER BY version")
        .fetch_all(pool)
        .await
}
