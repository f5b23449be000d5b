use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Pet routes.
///
/// ```text
/// GET  /                  -> list_pets
/// GET  /pet/list          -> list_pets
/// GET  /pet/create        -> create_form
/// POST /pet/create        -> create_pet
/// GET  /pet/update/{id}   -> update_form
/// POST /pet/update/{id}   -> update_pet
/// GET  /pet/delete/{id}   -> delete_pet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pets::list_pets))
        .route("/pet/list", get(pets::list_pets))
        .route(
            "/pet/create",
            get(pets::create_form).post(pets::create_pet),
        )
        .route(
            "/pet/update/{id}",
            get(pets::update_form).post(pets::update_pet),
        )
        .route("/pet/delete/{id}", get(pets::delete_pet))
}
