//! Backend seams.
//!
//! The CMS only talks to storage through these traits. The MongoDB
//! repositories implement them for production; tests swap in in-memory
//! versions.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{ContentRow, ImageRecord, SessionRecord};

/// The `site_content` table.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Every stored override row.
    async fn list(&self) -> Result<Vec<ContentRow>>;

    /// Insert or replace the row with the same `(section, key)`.
    async fn upsert(&self, row: &ContentRow) -> Result<()>;
}

/// The `site_images` table.
#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Insert or replace the record with the same name.
    async fn upsert(&self, record: &ImageRecord) -> Result<()>;

    /// Remove a record. Returns whether one existed.
    async fn delete(&self, name: &str) -> Result<bool>;
}

/// Session validation offered by the auth provider.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The live session for this token pair, if the backend accepts it.
    async fn validate(&self, access_token: &str, refresh_token: &str)
        -> Result<Option<SessionRecord>>;

    /// Invalidate the session behind an access token.
    async fn revoke(&self, access_token: &str) -> Result<()>;
}
