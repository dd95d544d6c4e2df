//! Embedded schema migration.
//!
//! The DDL ships inside the binary so a fresh database needs no
//! out-of-band tooling: `Store::connect` applies it on startup unless
//! migrations are disabled. Every statement guards itself with
//! `IF NOT EXISTS`, so re-running the file is harmless.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// The full schema DDL (`migrations/001_schema.sql`).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Apply the embedded schema to the database. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Applying embedded schema");

    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(e.to_string()))?;

    tracing::info!("Schema is up to date");
    Ok(())
}

/// Whether the schema has ever been applied to this database.
///
/// Probes for the `users` table; the whole schema lands in one migration,
/// so one table stands in for all of it.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let (initialized,): (bool,) =
        sqlx::query_as("SELECT to_regclass('public.users') IS NOT NULL")
            .fetch_one(pool)
            .await?;

    Ok(initialized)
}
