//! Handlers for the kind pages.

use axum::extract::State;
use axum::response::IntoResponse;
use pets_core::error::CoreError;
use pets_core::types::DbId;
use pets_db::models::kind::{CreateKind, UpdateKind};
use pets_db::repositories::KindRepo;
use tera::Context;

use crate::error::AppResult;
use crate::extract::{Form, Path};
use crate::handlers::delete_error;
use crate::response::found;
use crate::state::AppState;
use crate::views;

const LIST_PATH: &str = "/kind/list";

/// GET /kind, /kind/list
pub async fn list_kinds(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let kinds = KindRepo::list(&state.pool).await?;

    let mut context = Context::new();
    context.insert("kinds", &kinds);
    Ok(views::render("kind_list.html", &context)?)
}

/// GET /kind/create
pub async fn create_form() -> AppResult<impl IntoResponse> {
    Ok(views::render("kind_create.html", &Context::new())?)
}

/// POST /kind/create
pub async fn create_kind(
    State(state): State<AppState>,
    Form(input): Form<CreateKind>,
) -> AppResult<impl IntoResponse> {
    let kind = KindRepo::create(&state.pool, &input).await?;

    tracing::info!(kind_id = kind.id, name = %kind.name, "Kind created");

    Ok(found(LIST_PATH))
}

/// GET /kind/update/{id}
pub async fn update_form(
    State(state): State<AppState>,
    Path(kind_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let kind = KindRepo::find_by_id(&state.pool, kind_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Kind", kind_id))?;

    let mut context = Context::new();
    context.insert("data", &kind);
    Ok(views::render("kind_update.html", &context)?)
}

/// POST /kind/update/{id}
pub async fn update_kind(
    State(state): State<AppState>,
    Path(kind_id): Path<DbId>,
    Form(input): Form<UpdateKind>,
) -> AppResult<impl IntoResponse> {
    KindRepo::update(&state.pool, kind_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Kind", kind_id))?;

    tracing::info!(kind_id, "Kind updated");

    Ok(found(LIST_PATH))
}

/// GET /kind/delete/{id}
///
/// Refused with an error page while any pet is of this kind.
pub async fn delete_kind(
    State(state): State<AppState>,
    Path(kind_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = KindRepo::delete(&state.pool, kind_id)
        .await
        .map_err(|err| delete_error("Kind", kind_id, err))?;

    if deleted {
        tracing::info!(kind_id, "Kind deleted");
    } else {
        tracing::debug!(kind_id, "Kind already absent");
    }

    Ok(found(LIST_PATH))
}
