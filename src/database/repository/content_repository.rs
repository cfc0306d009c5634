//! Site content repository.
//!
//! No caching: every render merges the rows it just read, and every admin
//! write goes straight to MongoDB.

use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{IndexOptions, ReplaceOptions};
use mongodb::{Collection, IndexModel};
use tracing::{debug, info};

use crate::database::models::ContentRow;
use crate::database::store::ContentStore;
use crate::database::Database;

/// Repository for translation overrides.
pub struct ContentRepository {
    collection: Collection<ContentRow>,
}

impl ContentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("site_content"),
        }
    }

    /// Create the unique `(section, key)` index upserts rely on.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "section": 1, "key": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        info!("site_content index ready");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for ContentRepository {
    async fn list(&self) -> Result<Vec<ContentRow>> {
        let cursor = self.collection.find(doc! {}).await?;
        let rows: Vec<ContentRow> = cursor.try_collect().await?;
        debug!("Loaded {} content rows", rows.len());
        Ok(rows)
    }

    async fn upsert(&self, row: &ContentRow) -> Result<()> {
        let filter = doc! {
            "section": &row.section,
            "key": &row.key
        };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, row)
            .with_options(options)
            .await?;

        debug!("Upserted content {}", row.path());
        Ok(())
    }
}
