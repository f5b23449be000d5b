//! Response helpers shared by the form handlers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// `302 Found` redirect, sent after every successful form submission
/// and delete link so the browser reloads the relevant list page.
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
