//! Route table.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use crate::cms::MAX_IMAGE_BYTES;

use super::handlers::{self, auth, content, images};
use super::state::AppState;

/// Room for an oversized file plus form overhead, so size violations reach
/// the upload validation and get a 400 instead of a 413.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES * 2;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/content", get(content::translations))
        .route("/api/content/resolve", get(content::resolve))
        .route("/api/content/update", post(content::update))
        .route("/api/content/sync", post(content::sync))
        .route(
            "/api/images/upload",
            post(images::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/api/images/delete", post(images::delete))
        .route("/images/:name", get(images::serve))
        .route("/api/auth/session", post(auth::establish))
        .route("/api/auth/logout", post(auth::logout))
        .with_state(state)
}
