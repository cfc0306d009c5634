//! Admin session lookups.
//!
//! Sessions are written by the auth provider; this side only checks and
//! revokes them.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::debug;

use crate::database::models::SessionRecord;
use crate::database::store::SessionStore;
use crate::database::Database;

pub struct SessionRepository {
    collection: Collection<SessionRecord>,
}

impl SessionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("sessions"),
        }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn validate(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<Option<SessionRecord>> {
        let filter = doc! {
            "access_token": access_token,
            "refresh_token": refresh_token
        };

        let session = self
            .collection
            .find_one(filter)
            .await?
            .filter(|s| !s.is_expired(Utc::now()));

        debug!("Session lookup: valid={}", session.is_some());
        Ok(session)
    }

    async fn revoke(&self, access_token: &str) -> Result<()> {
        let result = self
            .collection
            .delete_one(doc! { "access_token": access_token })
            .await?;
        debug!("Revoked {} session(s)", result.deleted_count);
        Ok(())
    }
}
