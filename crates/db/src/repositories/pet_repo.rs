//! Repository for the `pets` table, including the joined listing query.

use pets_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::pet::{CreatePet, Pet, PetListing, UpdatePet};

const COLUMNS: &str = "id, name, age, kind_id, owner_id";

/// Pets joined with their kind and owner, one row per pet.
const LISTING_QUERY: &str = "\
    SELECT p.id, p.name, p.age, \
           k.id AS kind_id, k.name AS kind_name, k.food, k.sound, \
           o.id AS owner_id, o.name AS owner \
    FROM pets p \
    JOIN kinds k ON k.id = p.kind_id \
    JOIN owners o ON o.id = p.owner_id \
    ORDER BY p.id";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// List every pet with its kind's name, food and sound and its
    /// owner's name denormalized onto the row.
    pub async fn list_with_details(pool: &SqlitePool) -> Result<Vec<PetListing>, sqlx::Error> {
        let pets = sqlx::query_as::<_, PetListing>(LISTING_QUERY)
            .fetch_all(pool)
            .await?;
        tracing::debug!(count = pets.len(), "Loaded pet listing");
        Ok(pets)
    }

    /// Count rows in `pets`.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pets")
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = ?1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new pet, returning the created row.
    ///
    /// Fails with a foreign key violation if the kind or owner is missing.
    pub async fn create(pool: &SqlitePool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, age, kind_id, owner_id) VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.kind_id)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Replace a pet's fields. Returns `None` if no row has that ID.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET name = ?2, age = ?3, kind_id = ?4, owner_id = ?5 \
             WHERE id = ?1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(input.kind_id)
            .bind(input.owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
