//! Request handlers, one module per entity.
//!
//! Page handlers render a template; submit and delete handlers redirect
//! back to the entity's list page.

pub mod kinds;
pub mod owners;
pub mod pets;

use pets_core::error::CoreError;
use pets_core::types::DbId;

use crate::error::AppError;

/// Turn a failed delete into an error the user can read.
///
/// A foreign key failure means pets still reference the row, which is
/// reported as a conflict naming the entity. Any other failure is shown
/// with the database's text and a 500 status.
pub(crate) fn delete_error(entity: &'static str, id: DbId, err: sqlx::Error) -> AppError {
    let detail = match &err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    };

    if !pets_db::is_foreign_key_violation(&err) {
        tracing::error!(entity, id, error = %err, "Delete failed");
        return AppError::OperationFailed(format!(
            "{entity} {id} could not be deleted ({detail})"
        ));
    }

    tracing::warn!(entity, id, error = %detail, "Delete blocked by referencing pets");

    AppError::Core(CoreError::Conflict(format!(
        "{entity} {id} cannot be deleted while pets reference it ({detail})"
    )))
}
