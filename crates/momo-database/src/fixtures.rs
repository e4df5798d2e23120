//! Test-database teardown.

use sqlx::PgPool;
use tracing::info;

use momo_core::error::{AppError, ErrorKind};
use momo_core::result::AppResult;

/// Tables in dependency order (children first).
pub const TABLES: [&str; 4] = ["likes", "comments", "posts", "users"];

/// Remove every row from every table and reset the id sequences, so the
/// next seeded user is id 1 again.
pub async fn truncate_all(pool: &PgPool) -> AppResult<()> {
    let statement = format!("TRUNCATE TABLE {} RESTART IDENTITY CASCADE", TABLES.join(", "));

    sqlx::query(&statement)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to truncate tables", e))?;

    info!(tables = ?TABLES, "Database truncated");
    Ok(())
}

/// Row counts per table, in [`TABLES`] order.
pub async fn table_counts(pool: &PgPool) -> AppResult<Vec<(&'static str, i64)>> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count {table}"), e)
            })?;
        counts.push((table, count));
    }
    Ok(counts)
}
