//! Handlers for the owner pages.

use axum::extract::State;
use axum::response::IntoResponse;
use pets_core::error::CoreError;
use pets_core::types::DbId;
use pets_db::models::owner::{CreateOwner, UpdateOwner};
use pets_db::repositories::OwnerRepo;
use tera::Context;

use crate::error::AppResult;
use crate::extract::{Form, Path};
use crate::handlers::delete_error;
use crate::response::found;
use crate::state::AppState;
use crate::views;

const LIST_PATH: &str = "/owner/list";

/// GET /owner, /owner/list
pub async fn list_owners(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let owners = OwnerRepo::list(&state.pool).await?;

    let mut context = Context::new();
    context.insert("owners", &owners);
    Ok(views::render("owner_list.html", &context)?)
}

/// GET /owner/create
pub async fn create_form() -> AppResult<impl IntoResponse> {
    Ok(views::render("owner_create.html", &Context::new())?)
}

/// POST /owner/create
pub async fn create_owner(
    State(state): State<AppState>,
    Form(input): Form<CreateOwner>,
) -> AppResult<impl IntoResponse> {
    let owner = OwnerRepo::create(&state.pool, &input).await?;

    tracing::info!(owner_id = owner.id, name = %owner.name, "Owner created");

    Ok(found(LIST_PATH))
}

/// GET /owner/update/{id}
pub async fn update_form(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let owner = OwnerRepo::find_by_id(&state.pool, owner_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Owner", owner_id))?;

    let mut context = Context::new();
    context.insert("data", &owner);
    Ok(views::render("owner_update.html", &context)?)
}

/// POST /owner/update/{id}
pub async fn update_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Form(input): Form<UpdateOwner>,
) -> AppResult<impl IntoResponse> {
    OwnerRepo::update(&state.pool, owner_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Owner", owner_id))?;

    tracing::info!(owner_id, "Owner updated");

    Ok(found(LIST_PATH))
}

/// GET /owner/delete/{id}
///
/// Refused with an error page while the owner still has pets.
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = OwnerRepo::delete(&state.pool, owner_id)
        .await
        .map_err(|err| delete_error("Owner", owner_id, err))?;

    if deleted {
        tracing::info!(owner_id, "Owner deleted");
    } else {
        tracing::debug!(owner_id, "Owner already absent");
    }

    Ok(found(LIST_PATH))
}
