#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use pets_api::config::ServerConfig;
use pets_api::router::build_app_router;
use pets_api::state::AppState;
use pets_db::models::kind::CreateKind;
use pets_db::models::owner::CreateOwner;
use pets_db::models::pet::CreatePet;
use pets_db::repositories::{KindRepo, OwnerRepo, PetRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, on top of the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

/// Ids of the rows inserted by [`seed`].
pub struct Seeded {
    pub dog: i64,
    pub cat: i64,
    pub greg: i64,
    pub david: i64,
    pub heidi: i64,
}

/// Two kinds, two owners and four pets; David owns only heidi the cat.
pub async fn seed(pool: &SqlitePool) -> Seeded {
    let kind = |name: &str, food: &str, sound: &str| CreateKind {
        name: name.to_string(),
        food: Some(food.to_string()),
        sound: Some(sound.to_string()),
    };
    let owner = |name: &str, address: &str| CreateOwner {
        name: name.to_string(),
        address: Some(address.to_string()),
    };

    let dog = KindRepo::create(pool, &kind("dog", "dogfood", "bark"))
        .await
        .unwrap()
        .id;
    let cat = KindRepo::create(pool, &kind("cat", "catfood", "meow"))
        .await
        .unwrap()
        .id;
    let greg = OwnerRepo::create(pool, &owner("Greg", "1365 Maple Ave."))
        .await
        .unwrap()
        .id;
    let david = OwnerRepo::create(pool, &owner("David", "13 Elm St."))
        .await
        .unwrap()
        .id;

    let mut heidi = 0;
    for (name, age, kind_id, owner_id) in [
        ("dorothy", 9, dog, greg),
        ("suzy", 9, dog, greg),
        ("casey", 9, cat, greg),
        ("heidi", 15, cat, david),
    ] {
        let pet = PetRepo::create(
            pool,
            &CreatePet {
                name: name.to_string(),
                age: Some(age),
                kind_id,
                owner_id,
            },
        )
        .await
        .unwrap();
        if name == "heidi" {
            heidi = pet.id;
        }
    }

    Seeded {
        dog,
        cat,
        greg,
        david,
        heidi,
    }
}
