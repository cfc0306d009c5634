//! Request handlers grouped by resource.

pub mod auth;
pub mod content;
pub mod images;

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
