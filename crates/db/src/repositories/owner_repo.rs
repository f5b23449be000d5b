//! Repository for the `owners` table.

use pets_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::owner::{CreateOwner, Owner, UpdateOwner};

const COLUMNS: &str = "id, name, address";

/// Provides CRUD operations for pet owners.
pub struct OwnerRepo;

impl OwnerRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = ?1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query =
            format!("INSERT INTO owners (name, address) VALUES (?1, ?2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Replace an owner's fields. Returns `None` if no row has that ID.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateOwner,
    ) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!(
            "UPDATE owners SET name = ?2, address = ?3 WHERE id = ?1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the owner still has pets.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
