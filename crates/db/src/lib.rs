//! SQLite data-access layer for kinds, owners and pets.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created when missing and every connection has
/// `PRAGMA foreign_keys = ON`, which the `RESTRICT`/`CASCADE` rules on
/// `pets` depend on.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Message SQLite attaches to every foreign key failure.
const FOREIGN_KEY_MESSAGE: &str = "FOREIGN KEY constraint failed";

/// Whether `err` is a foreign key constraint failure, e.g. deleting a
/// kind that pets still reference or inserting a pet for a missing owner.
///
/// SQLite reports immediate child-side failures as
/// `SQLITE_CONSTRAINT_FOREIGNKEY` (787), which sqlx classifies, but an
/// `ON DELETE RESTRICT` action fires as `SQLITE_CONSTRAINT_TRIGGER`
/// (1811), which sqlx leaves as `ErrorKind::Other`. Trigger codes only
/// count when the message is the foreign key one, so a user-defined
/// `RAISE(ABORT, ...)` is not mistaken for a restricted delete.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };

    if matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) {
        return true;
    }

    matches!(db_err.code().as_deref(), Some("787") | Some("1811"))
        && db_err.message().starts_with(FOREIGN_KEY_MESSAGE)
}
