//! HTTP-level tests for the pet pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, post_form, seed};
use pets_db::repositories::PetRepo;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_shows_kind_and_owner_details(pool: SqlitePool) {
    seed(&pool).await;

    for uri in ["/", "/pet/list"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let html = body_text(response).await;
        for expected in ["dorothy", "heidi", "dogfood", "meow", "Greg", "David"] {
            assert!(html.contains(expected), "{uri} missing {expected}");
        }
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_list_renders(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/pet/list").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No pets yet."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_offers_kinds_and_owners(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let response = get(common::build_test_app(pool), "/pet/create").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(&format!("<option value=\"{}\">dog</option>", ids.dog)));
    assert!(html.contains(&format!("<option value=\"{}\">David</option>", ids.david)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_pet_redirects_to_list(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=rex&age=3&kind_id={}&owner_id={}", ids.dog, ids.david);
    let response = post_form(common::build_test_app(pool.clone()), "/pet/create", &body).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/pet/list");

    let rex = PetRepo::list_with_details(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.name == "rex")
        .expect("rex should be stored");
    assert_eq!(rex.age, Some(3));
    assert_eq!(rex.kind_name, "dog");
    assert_eq!(rex.owner, "David");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_pet_with_non_numeric_age_stores_zero(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=old+timer&age=ancient&kind_id={}&owner_id={}", ids.cat, ids.greg);
    let response = post_form(common::build_test_app(pool.clone()), "/pet/create", &body).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let pet = PetRepo::list_with_details(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.name == "old timer")
        .unwrap();
    assert_eq!(pet.age, Some(0));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_pet_with_unknown_kind_is_conflict(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=ghost&age=1&kind_id=999&owner_id={}", ids.greg);
    let response = post_form(common::build_test_app(pool.clone()), "/pet/create", &body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("FOREIGN KEY"));
    assert_eq!(PetRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_pet_with_empty_kind_is_bad_request(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=ghost&age=1&kind_id=&owner_id={}", ids.greg);
    let response = post_form(common::build_test_app(pool.clone()), "/pet/create", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("<title>Error 400</title>"));
    assert!(html.contains("Failed to deserialize form body"));
    assert_eq!(PetRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_form_preselects_current_values(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let uri = format!("/pet/update/{}", ids.heidi);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("value=\"heidi\""));
    assert!(html.contains("value=\"15\""));
    assert!(html.contains(&format!("<option value=\"{}\" selected>cat</option>", ids.cat)));
    assert!(html.contains(&format!("<option value=\"{}\" selected>David</option>", ids.david)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_form_for_missing_pet_is_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/pet/update/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Pet with id 999 not found"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_pet_redirects_and_stores(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=heidi&age=16&kind_id={}&owner_id={}", ids.dog, ids.greg);
    let uri = format!("/pet/update/{}", ids.heidi);
    let response = post_form(common::build_test_app(pool.clone()), &uri, &body).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/pet/list");

    let heidi = PetRepo::find_by_id(&pool, ids.heidi).await.unwrap().unwrap();
    assert_eq!(heidi.age, Some(16));
    assert_eq!(heidi.kind_id, ids.dog);
    assert_eq!(heidi.owner_id, ids.greg);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_pet_is_404(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let body = format!("name=nobody&age=1&kind_id={}&owner_id={}", ids.dog, ids.greg);
    let response = post_form(common::build_test_app(pool), "/pet/update/999", &body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_pet_redirects(pool: SqlitePool) {
    let ids = seed(&pool).await;

    let uri = format!("/pet/delete/{}", ids.heidi);
    let response = get(common::build_test_app(pool.clone()), &uri).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/pet/list");
    assert!(PetRepo::find_by_id(&pool, ids.heidi).await.unwrap().is_none());
    assert_eq!(PetRepo::count(&pool).await.unwrap(), 3);

    // Repeating the delete link is harmless.
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}
