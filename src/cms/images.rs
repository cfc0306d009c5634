//! Image upload and removal.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::database::{ImageCatalog, ImageRecord};
use crate::error::CmsError;
use crate::storage::{ObjectStore, StorageError};

/// Largest accepted upload: 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A file received from the admin panel.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub alt_text: String,
    pub section: String,
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImage {
    pub path: String,
    pub url: String,
}

pub struct ImageService {
    objects: Arc<dyn ObjectStore>,
    catalog: Arc<dyn ImageCatalog>,
}

impl ImageService {
    pub fn new(objects: Arc<dyn ObjectStore>, catalog: Arc<dyn ImageCatalog>) -> Self {
        Self { objects, catalog }
    }

    /// Validate, store and catalog an image. Same-named files are replaced.
    pub async fn upload(&self, upload: Option<ImageUpload>) -> Result<UploadedImage, CmsError> {
        let upload = validate_upload(upload)?;

        let path = self
            .objects
            .put(&upload.file_name, &upload.data)
            .await
            .map_err(|e| storage_error("Upload error", e))?;
        let url = self.objects.public_url(&path);

        let mut record = ImageRecord::new(&path, &url);
        record.alt_text = upload.alt_text;
        record.section = upload.section;
        self.catalog
            .upsert(&record)
            .await
            .map_err(|e| CmsError::backend("Upload error", e))?;

        info!("Uploaded image {} ({} bytes)", path, upload.data.len());
        Ok(UploadedImage { path, url })
    }

    /// Remove an image object and its catalog record.
    pub async fn delete(&self, name: Option<&str>) -> Result<(), CmsError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CmsError::validation("No file name provided"))?;

        self.objects
            .remove(name)
            .await
            .map_err(|e| storage_error("Delete error", e))?;
        self.catalog
            .delete(name)
            .await
            .map_err(|e| CmsError::backend("Delete error", e))?;

        info!("Deleted image {}", name);
        Ok(())
    }

    /// Stored bytes for `name`, `None` if absent.
    pub async fn fetch(&self, name: &str) -> Result<Option<Vec<u8>>, CmsError> {
        self.objects
            .get(name)
            .await
            .map_err(|e| storage_error("Fetch error", e))
    }
}

/// Checks run before anything touches storage.
fn validate_upload(upload: Option<ImageUpload>) -> Result<ImageUpload, CmsError> {
    let upload = upload
        .filter(|u| !u.file_name.is_empty())
        .ok_or_else(|| CmsError::validation("No file provided"))?;

    if !upload.content_type.starts_with("image/") {
        return Err(CmsError::validation("File must be an image"));
    }
    if upload.data.len() > MAX_IMAGE_BYTES {
        return Err(CmsError::validation("File size must be less than 5MB"));
    }
    Ok(upload)
}

fn storage_error(context: &str, err: StorageError) -> CmsError {
    match err {
        StorageError::InvalidKey(key) => CmsError::validation(format!("Invalid file name: {key:?}")),
        other => CmsError::backend(context, other),
    }
}
