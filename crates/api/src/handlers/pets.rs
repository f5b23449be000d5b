//! Handlers for the pet pages.
//!
//! The create and update forms offer every kind and owner as choices.
//! Ages arrive as free text and are coerced with
//! [`pets_core::forms::parse_optional_age`].

use axum::extract::State;
use axum::response::IntoResponse;
use pets_core::error::CoreError;
use pets_core::forms::parse_optional_age;
use pets_core::types::DbId;
use pets_db::models::pet::CreatePet;
use pets_db::repositories::{KindRepo, OwnerRepo, PetRepo};
use pets_db::DbPool;
use serde::Deserialize;
use tera::Context;

use crate::error::AppResult;
use crate::extract::{Form, Path};
use crate::response::found;
use crate::state::AppState;
use crate::views;

const LIST_PATH: &str = "/pet/list";

/// Raw pet form submission, before age coercion.
#[derive(Debug, Deserialize)]
pub struct PetForm {
    pub name: String,
    #[serde(default)]
    pub age: Option<String>,
    pub kind_id: DbId,
    pub owner_id: DbId,
}

impl From<PetForm> for CreatePet {
    fn from(form: PetForm) -> Self {
        Self {
            age: Some(parse_optional_age(form.age.as_deref())),
            name: form.name,
            kind_id: form.kind_id,
            owner_id: form.owner_id,
        }
    }
}

/// Context holding the kind and owner choices for the pet forms.
async fn choices_context(pool: &DbPool) -> AppResult<Context> {
    let kinds = KindRepo::list(pool).await?;
    let owners = OwnerRepo::list(pool).await?;

    let mut context = Context::new();
    context.insert("kinds", &kinds);
    context.insert("owners", &owners);
    Ok(context)
}

/// GET /, /pet/list
pub async fn list_pets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pets = PetRepo::list_with_details(&state.pool).await?;

    let mut context = Context::new();
    context.insert("pets", &pets);
    Ok(views::render("pet_list.html", &context)?)
}

/// GET /pet/create
pub async fn create_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let context = choices_context(&state.pool).await?;
    Ok(views::render("pet_create.html", &context)?)
}

/// POST /pet/create
pub async fn create_pet(
    State(state): State<AppState>,
    Form(form): Form<PetForm>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::create(&state.pool, &CreatePet::from(form)).await?;

    tracing::info!(
        pet_id = pet.id,
        name = %pet.name,
        kind_id = pet.kind_id,
        owner_id = pet.owner_id,
        "Pet created",
    );

    Ok(found(LIST_PATH))
}

/// GET /pet/update/{id}
pub async fn update_form(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::find_by_id(&state.pool, pet_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Pet", pet_id))?;

    let mut context = choices_context(&state.pool).await?;
    context.insert("data", &pet);
    Ok(views::render("pet_update.html", &context)?)
}

/// POST /pet/update/{id}
pub async fn update_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
    Form(form): Form<PetForm>,
) -> AppResult<impl IntoResponse> {
    PetRepo::update(&state.pool, pet_id, &CreatePet::from(form))
        .await?
        .ok_or_else(|| CoreError::not_found("Pet", pet_id))?;

    tracing::info!(pet_id, "Pet updated");

    Ok(found(LIST_PATH))
}

/// GET /pet/delete/{id}
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if PetRepo::delete(&state.pool, pet_id).await? {
        tracing::info!(pet_id, "Pet deleted");
    } else {
        tracing::debug!(pet_id, "Pet already absent");
    }

    Ok(found(LIST_PATH))
}
