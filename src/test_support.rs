//! In-memory backends for tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;

use crate::database::{
    ContentRow, ContentStore, ImageCatalog, ImageRecord, SessionRecord, SessionStore,
};
use crate::storage::{ObjectStore, StorageError, validate_key};

/// `site_content` table keyed by `(section, key)`.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    rows: Mutex<BTreeMap<(String, String), ContentRow>>,
    fail_list: AtomicBool,
    /// Upserts allowed to succeed before the rest fail.
    upsert_budget: Mutex<Option<usize>>,
    upsert_calls: AtomicUsize,
}

impl MemoryContentStore {
    pub fn with_rows(rows: Vec<ContentRow>) -> Self {
        let store = Self::default();
        {
            let mut map = store.rows.lock();
            for row in rows {
                map.insert((row.section.clone(), row.key.clone()), row);
            }
        }
        store
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_upserts_after(&self, successes: usize) {
        *self.upsert_budget.lock() = Some(successes);
    }

    pub fn row(&self, section: &str, key: &str) -> Option<ContentRow> {
        self.rows
            .lock()
            .get(&(section.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn list(&self) -> Result<Vec<ContentRow>> {
        if self.fail_list.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        Ok(self.rows.lock().values().cloned().collect())
    }

    async fn upsert(&self, row: &ContentRow) -> Result<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(budget) = self.upsert_budget.lock().as_mut() {
            if *budget == 0 {
                bail!("write conflict");
            }
            *budget -= 1;
        }

        self.rows
            .lock()
            .insert((row.section.clone(), row.key.clone()), row.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryImageCatalog {
    records: Mutex<BTreeMap<String, ImageRecord>>,
}

impl MemoryImageCatalog {
    pub fn get(&self, name: &str) -> Option<ImageRecord> {
        self.records.lock().get(name).cloned()
    }
}

#[async_trait]
impl ImageCatalog for MemoryImageCatalog {
    async fn upsert(&self, record: &ImageRecord) -> Result<()> {
        self.records.lock().insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.records.lock().remove(name).is_some())
    }
}

/// Object store with URLs under `https://cdn.test/images/`.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    fail: AtomicBool,
    put_calls: AtomicUsize,
}

impl MemoryObjectStore {
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().contains_key(key)
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("bucket unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<String, StorageError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        validate_key(key)?;
        self.objects.lock().insert(key.to_string(), data.to_vec());
        Ok(key.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.check()?;
        validate_key(key)?;
        Ok(self.objects.lock().get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        validate_key(key)?;
        self.objects.lock().remove(key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/images/{key}")
    }
}

#[derive(Debug, Default)]
pub struct MemorySessions {
    sessions: Mutex<Vec<SessionRecord>>,
    fail: AtomicBool,
}

impl MemorySessions {
    /// One live session for the given token pair.
    pub fn with_session(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::default();
        store.sessions.lock().push(SessionRecord {
            id: None,
            user_id: "admin".to_string(),
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        });
        store
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

/// Whether `session` was issued for exactly this token pair.
fn issued_for(session: &SessionRecord, access_token: &str, refresh_token: &str) -> bool {
    session.access_token == access_token && session.refresh_token == refresh_token
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn validate(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<Option<SessionRecord>> {
        if self.fail.load(Ordering::SeqCst) {
            bail!("auth provider unavailable");
        }
        let now = Utc::now();
        Ok(self
            .sessions
            .lock()
            .iter()
            .find(|s| issued_for(s, access_token, refresh_token) && !s.is_expired(now))
            .cloned())
    }

    async fn revoke(&self, access_token: &str) -> Result<()> {
        self.sessions.lock().retain(|s| s.access_token != access_token);
        Ok(())
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_require_both_tokens() {
        let sessions = MemorySessions::with_session("access", "refresh");

        assert!(sessions.validate("access", "refresh").await.unwrap().is_some());
        assert!(sessions.validate("access", "other").await.unwrap().is_none());
        assert!(sessions.validate("other", "refresh").await.unwrap().is_none());
    }
}
