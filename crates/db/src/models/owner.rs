use pets_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `owners` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
}

/// DTO for creating a new owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOwner {
    pub name: String,
    pub address: Option<String>,
}

/// DTO for replacing an existing owner's fields.
pub type UpdateOwner = CreateOwner;
