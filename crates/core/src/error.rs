use crate::types::DbId;

/// Domain errors shared by the data-access and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The operation would break referential integrity, e.g. deleting a
    /// kind or owner that pets still point at.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
