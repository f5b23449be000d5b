//! Pets and the denormalized listing row shown on the pet list.

use pets_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pets` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub age: Option<i64>,
    pub kind_id: DbId,
    pub owner_id: DbId,
}

/// A pet joined with its kind and owner.
///
/// `kind_name`, `food` and `sound` come from `kinds`; `owner` is the
/// owner's name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PetListing {
    pub id: DbId,
    pub name: String,
    pub age: Option<i64>,
    pub kind_id: DbId,
    pub kind_name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
    pub owner_id: DbId,
    pub owner: String,
}

/// DTO for creating a new pet. `age` has already been coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub age: Option<i64>,
    pub kind_id: DbId,
    pub owner_id: DbId,
}

/// DTO for replacing an existing pet's fields.
pub type UpdatePet = CreatePet;
