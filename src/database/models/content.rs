//! Site content override model.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An edited translation (stored in `site_content` collection).
///
/// `(section, key)` identifies the row; writes upsert on that pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    /// MongoDB document ID
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Top-level group, e.g. `hero`
    pub section: String,

    /// Dot path inside the section, e.g. `cta.primary`
    pub key: String,

    /// English text. Empty or missing means "use the default".
    #[serde(default)]
    pub en: Option<String>,

    /// Spanish text. Empty or missing means "use the default".
    #[serde(default)]
    pub es: Option<String>,

    /// Last write time
    pub updated_at: DateTime<Utc>,
}

impl ContentRow {
    /// Create a row stamped with the current time.
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        en: Option<String>,
        es: Option<String>,
    ) -> Self {
        Self {
            id: None,
            section: section.into(),
            key: key.into(),
            en,
            es,
            updated_at: Utc::now(),
        }
    }

    /// Full dot path from the tree root: `section.key`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}
