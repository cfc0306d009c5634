//! Session endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::cms::SessionTokens;
use crate::error::CmsError;
use crate::server::cookies::{
    ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, clear_cookie, session_cookie, session_tokens,
};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// `POST /api/auth/session` - check a token pair from the auth provider and
/// store it in the session cookies.
pub async fn establish(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Response, CmsError> {
    let Json(request) = payload.map_err(|e| CmsError::validation(e.body_text()))?;
    let tokens = SessionTokens::from_parts(request.access_token, request.refresh_token)
        .ok_or_else(|| CmsError::validation("Missing session tokens"))?;

    let session = state.auth.authenticate(Some(&tokens)).await?;
    info!("Session established for {}", session.user_id);

    let cookies = AppendHeaders([
        (SET_COOKIE, session_cookie(ACCESS_TOKEN_COOKIE, &tokens.access_token)),
        (SET_COOKIE, session_cookie(REFRESH_TOKEN_COOKIE, &tokens.refresh_token)),
    ]);
    Ok((cookies, Json(json!({ "success": true }))).into_response())
}

/// `POST /api/auth/logout` - drop the cookies, revoke the session and send
/// the browser to the login page.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let tokens = session_tokens(&headers);
    state.auth.logout(tokens.as_ref()).await;

    let cookies = AppendHeaders([
        (SET_COOKIE, clear_cookie(ACCESS_TOKEN_COOKIE)),
        (SET_COOKIE, clear_cookie(REFRESH_TOKEN_COOKIE)),
    ]);
    (cookies, Redirect::to(&state.login_path)).into_response()
}
