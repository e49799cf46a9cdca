//! Embedded schema migrations applied at startup.
//!
//! Migration SQL lives under `migrations/` and is compiled into the binary,
//! so a deployed server never depends on external tooling to bring the
//! schema up to date.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

use crate::error::{AppError, AppResult};

/// All migrations bundled into the binary at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs pending migrations against the configured database.
///
/// Diesel's migration harness is synchronous, so the work runs on a
/// blocking task with its own short-lived connection instead of borrowing
/// one from the async pool.
///
/// # Returns
/// The names of the migrations that were applied (empty when the schema
/// was already current).
pub async fn run_pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    let database_url = database_url.to_string();
    let applied_migrations = tokio::task::spawn_blocking(move || {
        use diesel::Connection;
        use diesel::pg::PgConnection;
        use diesel_migrations::MigrationHarness;

        let mut conn =
            PgConnection::establish(&database_url).map_err(|e| AppError::Database {
                operation: "establish connection for migrations".to_string(),
                source: anyhow::anyhow!("Connection error: {}", e),
            })?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        // Convert to owned strings to avoid lifetime issues
        let migration_names: Vec<String> = applied.iter().map(|m| m.to_string()).collect();
        Ok::<_, AppError>(migration_names)
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })??;

    Ok(applied_migrations)
}
