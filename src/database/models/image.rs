//! Uploaded image catalog model.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An uploaded site image (stored in `site_images` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Object key in storage, unique
    pub name: String,

    /// Public URL of the object
    pub url: String,

    #[serde(default)]
    pub alt_text: String,

    /// Page section the image belongs to
    #[serde(default)]
    pub section: String,

    pub updated_at: DateTime<Utc>,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            url: url.into(),
            alt_text: String::new(),
            section: String::new(),
            updated_at: Utc::now(),
        }
    }
}
