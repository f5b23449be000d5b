//! Animal kinds (dog, cat, ...).

use pets_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `kinds` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Kind {
    pub id: DbId,
    pub name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
}

/// DTO for creating a new kind.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKind {
    pub name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
}

/// DTO for replacing an existing kind's fields.
pub type UpdateKind = CreateKind;
