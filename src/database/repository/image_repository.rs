//! Site image catalog repository.

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{IndexOptions, ReplaceOptions};
use mongodb::{Collection, IndexModel};
use tracing::debug;

use crate::database::models::ImageRecord;
use crate::database::store::ImageCatalog;
use crate::database::Database;

/// Repository for uploaded image records.
pub struct ImageRepository {
    collection: Collection<ImageRecord>,
}

impl ImageRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("site_images"),
        }
    }

    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl ImageCatalog for ImageRepository {
    async fn upsert(&self, record: &ImageRecord) -> Result<()> {
        let filter = doc! { "name": &record.name };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, record)
            .with_options(options)
            .await?;

        debug!("Saved image record {}", record.name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "name": name }).await?;
        debug!("Deleted image record {}: {}", name, result.deleted_count > 0);
        Ok(result.deleted_count > 0)
    }
}
