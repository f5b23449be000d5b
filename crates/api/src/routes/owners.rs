use axum::routing::get;
use axum::Router;

use crate::handlers::owners;
use crate::state::AppState;

/// Owner routes.
///
/// ```text
/// GET  /owner               -> list_owners
/// GET  /owner/list          -> list_owners
/// GET  /owner/create        -> create_form
/// POST /owner/create        -> create_owner
/// GET  /owner/update/{id}   -> update_form
/// POST /owner/update/{id}   -> update_owner
/// GET  /owner/delete/{id}   -> delete_owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/owner", get(owners::list_owners))
        .route("/owner/list", get(owners::list_owners))
        .route(
            "/owner/create",
            get(owners::create_form).post(owners::create_owner),
        )
        .route(
            "/owner/update/{id}",
            get(owners::update_form).post(owners::update_owner),
        )
        .route("/owner/delete/{id}", get(owners::delete_owner))
}
