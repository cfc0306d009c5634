//! Admin session model.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A session issued by the auth provider (stored in `sessions` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Admin user this session belongs to
    pub user_id: String,

    pub access_token: String,

    pub refresh_token: String,

    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Whether the session is past its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
