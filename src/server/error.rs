//! HTTP mapping for [`CmsError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::CmsError;

impl CmsError {
    pub fn status(&self) -> StatusCode {
        match self {
            CmsError::Unauthorized => StatusCode::UNAUTHORIZED,
            CmsError::Validation(_) => StatusCode::BAD_REQUEST,
            CmsError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
