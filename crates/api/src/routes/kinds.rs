use axum::routing::get;
use axum::Router;

use crate::handlers::kinds;
use crate::state::AppState;

/// Kind routes.
///
/// ```text
/// GET  /kind               -> list_kinds
/// GET  /kind/list          -> list_kinds
/// GET  /kind/create        -> create_form
/// POST /kind/create        -> create_kind
/// GET  /kind/update/{id}   -> update_form
/// POST /kind/update/{id}   -> update_kind
/// GET  /kind/delete/{id}   -> delete_kind
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kind", get(kinds::list_kinds))
        .route("/kind/list", get(kinds::list_kinds))
        .route(
            "/kind/create",
            get(kinds::create_form).post(kinds::create_kind),
        )
        .route(
            "/kind/update/{id}",
            get(kinds::update_form).post(kinds::update_kind),
        )
        .route("/kind/delete/{id}", get(kinds::delete_kind))
}
