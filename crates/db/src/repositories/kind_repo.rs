//! Repository for the `kinds` table.

use pets_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::kind::{CreateKind, Kind, UpdateKind};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, food, sound";

/// Provides CRUD operations for animal kinds.
pub struct KindRepo;

impl KindRepo {
    /// List every kind in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Kind>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kinds ORDER BY id");
        sqlx::query_as::<_, Kind>(&query).fetch_all(pool).await
    }

    /// Find a kind by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Kind>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kinds WHERE id = ?1");
        sqlx::query_as::<_, Kind>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new kind, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateKind) -> Result<Kind, sqlx::Error> {
        let query = format!(
            "INSERT INTO kinds (name, food, sound) VALUES (?1, ?2, ?3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kind>(&query)
            .bind(&input.name)
            .bind(&input.food)
            .bind(&input.sound)
            .fetch_one(pool)
            .await
    }

    /// Replace a kind's fields. Returns `None` if no row has that ID.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateKind,
    ) -> Result<Option<Kind>, sqlx::Error> {
        let query = format!(
            "UPDATE kinds SET name = ?2, food = ?3, sound = ?4 WHERE id = ?1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kind>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.food)
            .bind(&input.sound)
            .fetch_optional(pool)
            .await
    }

    /// Delete a kind by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while any pet references it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kinds WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
