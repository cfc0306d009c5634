//! Image endpoints.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::cms::ImageUpload;
use crate::error::CmsError;
use crate::server::state::{AdminSession, AppState};

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    name: Option<String>,
}

/// `POST /api/images/upload` - multipart with a `file` field and optional
/// `alt_text` and `section` fields.
pub async fn upload(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, CmsError> {
    let mut multipart = multipart.map_err(|e| CmsError::validation(e.body_text()))?;
    let upload = read_upload(&mut multipart).await?;
    debug!("User {} uploading an image", session.user_id);

    let uploaded = state.images.upload(upload).await?;
    Ok(Json(json!({
        "success": true,
        "path": uploaded.path,
        "url": uploaded.url,
    })))
}

/// `POST /api/images/delete` - body `{"name": "..."}`.
pub async fn delete(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<Value>, CmsError> {
    let Json(request) = payload.map_err(|e| CmsError::validation(e.body_text()))?;
    debug!("User {} deleting image {:?}", session.user_id, request.name);

    state.images.delete(request.name.as_deref()).await?;
    Ok(Json(json!({ "success": true })))
}

/// `GET /images/{name}` - public URL target for stored images.
pub async fn serve(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, CmsError> {
    let Some(data) = state.images.fetch(&name).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    Ok((
        [
            (CONTENT_TYPE, content_type_for(&name)),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        data,
    )
        .into_response())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<ImageUpload>, CmsError> {
    let mut file: Option<ImageUpload> = None;
    let mut alt_text = String::new();
    let mut section = String::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(ImageUpload {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                    ..ImageUpload::default()
                });
            }
            Some("alt_text") => alt_text = field.text().await.map_err(multipart_error)?,
            Some("section") => section = field.text().await.map_err(multipart_error)?,
            _ => {}
        }
    }

    Ok(file.map(|upload| ImageUpload {
        alt_text,
        section,
        ..upload
    }))
}

fn multipart_error(err: MultipartError) -> CmsError {
    CmsError::validation(err.body_text())
}

fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
