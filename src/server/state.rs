//! Shared application state.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use async_trait::async_trait;

use crate::cms::{AuthService, ContentService, ImageService};
use crate::database::SessionRecord;
use crate::error::CmsError;

use super::cookies;

/// Services shared by every handler. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Merged translations and content writes.
    pub content: Arc<ContentService>,

    /// Image upload/delete.
    pub images: Arc<ImageService>,

    /// Session checks.
    pub auth: Arc<AuthService>,

    /// Where logout sends the browser.
    pub login_path: Arc<str>,
}

/// Extractor for handlers that need a signed-in admin.
///
/// Runs before the body is read, so unauthenticated requests are turned
/// away without parsing or touching anything else.
#[derive(Debug, Clone)]
pub struct AdminSession(pub SessionRecord);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = CmsError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let tokens = cookies::session_tokens(&parts.headers);
        state.auth.authenticate(tokens.as_ref()).await.map(Self)
    }
}
