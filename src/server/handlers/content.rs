//! Content endpoints.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::cms::ContentChanges;
use crate::error::CmsError;
use crate::server::language::request_language;
use crate::server::state::{AdminSession, AppState};

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    section: String,
    key: String,
    #[serde(default)]
    lang: Option<String>,
}

/// `GET /api/content` - merged translations for one language.
pub async fn translations(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Json<Value> {
    let language = request_language(query.lang.as_deref(), &headers);
    let merged = state.content.translations().await;

    Json(json!({
        "language": language,
        "translations": merged.get(language),
    }))
}

/// `GET /api/content/resolve` - one string, with fallbacks applied.
pub async fn resolve(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<Value>, CmsError> {
    let Query(query) = query.map_err(|e| CmsError::validation(e.body_text()))?;
    let language = request_language(query.lang.as_deref(), &headers);
    let value = state.content.resolve(&query.section, &query.key, language).await;

    Ok(Json(json!({ "value": value, "language": language })))
}

/// `POST /api/content/update` - apply `{"section.key": {en, es}}` edits.
pub async fn update(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    payload: Result<Json<ContentChanges>, JsonRejection>,
) -> Result<Json<Value>, CmsError> {
    let Json(changes) = payload.map_err(|e| CmsError::validation(e.body_text()))?;
    debug!("User {} updating {} content keys", session.user_id, changes.len());

    state.content.targeted_update(&changes).await?;
    Ok(Json(json!({ "success": true })))
}

/// `POST /api/content/sync` - seed storage from the bundled defaults.
pub async fn sync(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> Result<Json<Value>, CmsError> {
    debug!("User {} syncing default content", session.user_id);

    let count = state.content.bulk_sync().await?;
    Ok(Json(json!({ "success": true, "count": count })))
}
