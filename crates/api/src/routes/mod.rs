pub mod health;
pub mod kinds;
pub mod owners;
pub mod pets;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /, /pet/list                     pet list
/// /pet/create                      form (GET), submit (POST)
/// /pet/update/{id}                 form (GET), submit (POST)
/// /pet/delete/{id}                 delete, redirect
///
/// /kind, /kind/list                kind list
/// /kind/create                     form (GET), submit (POST)
/// /kind/update/{id}                form (GET), submit (POST)
/// /kind/delete/{id}                delete, redirect or error page
///
/// /owner, /owner/list              owner list
/// /owner/create                    form (GET), submit (POST)
/// /owner/update/{id}               form (GET), submit (POST)
/// /owner/delete/{id}               delete, redirect or error page
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(pets::router())
        .merge(kinds::router())
        .merge(owners::router())
}
