//! Reading merged translations and writing overrides.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info};

use crate::database::{ContentRow, ContentStore};
use crate::error::CmsError;
use crate::i18n::{self, Language, Translations};

/// New values for one `section.key` path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentChange {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub es: Option<String>,
}

/// Edits keyed by full `section.key` path. Applied in key order.
pub type ContentChanges = BTreeMap<String, ContentChange>;

pub struct ContentService {
    defaults: Arc<Translations>,
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(defaults: Arc<Translations>, store: Arc<dyn ContentStore>) -> Self {
        Self { defaults, store }
    }

    /// Bundled defaults with stored overrides applied.
    ///
    /// Falls back to the defaults when the store is empty or unreachable;
    /// the site keeps rendering either way.
    pub async fn translations(&self) -> Arc<Translations> {
        match self.store.list().await {
            Ok(rows) if rows.is_empty() => Arc::clone(&self.defaults),
            Ok(rows) => Arc::new(i18n::merge(&self.defaults, &rows)),
            Err(e) => {
                error!("Error fetching translations: {:#}", e);
                Arc::clone(&self.defaults)
            }
        }
    }

    /// Resolve one string against the current merged translations.
    pub async fn resolve(&self, section: &str, key: &str, language: Language) -> String {
        let merged = self.translations().await;
        i18n::resolve(&merged, section, key, language)
    }

    /// Write every bundled default into the store.
    ///
    /// Rows are always built from the defaults; existing overrides on the
    /// same keys are replaced and overrides on other keys are left alone.
    pub async fn bulk_sync(&self) -> Result<usize, CmsError> {
        let rows = seed_rows(&self.defaults);
        let count = self.write_rows(&rows).await?;

        info!("Synced {} content rows from defaults", count);
        Ok(count)
    }

    /// Upsert one row per change.
    ///
    /// All paths are checked before the first write. Writes are independent;
    /// the first failure stops the rest and is reported with how many were
    /// already saved.
    pub async fn targeted_update(&self, changes: &ContentChanges) -> Result<usize, CmsError> {
        let rows = changes
            .iter()
            .map(|(path, change)| change_row(path, change))
            .collect::<Result<Vec<_>, _>>()?;

        let count = self.write_rows(&rows).await?;

        info!("Updated {} content rows", count);
        Ok(count)
    }

    /// Upsert rows in order, stopping at the first failure. The error says
    /// how many rows were already saved.
    async fn write_rows(&self, rows: &[ContentRow]) -> Result<usize, CmsError> {
        for (applied, row) in rows.iter().enumerate() {
            if let Err(e) = self.store.upsert(row).await {
                error!("Error writing content {}: {:#}", row.path(), e);
                return Err(CmsError::Backend(format!(
                    "{} ({} of {} changes saved)",
                    e,
                    applied,
                    rows.len()
                )));
            }
        }
        Ok(rows.len())
    }
}

/// Split `section.rest.of.key` into `("section", "rest.of.key")`.
/// A path without a dot is all section and an empty key.
pub fn split_path(path: &str) -> (&str, &str) {
    path.split_once('.').unwrap_or((path, ""))
}

/// Row for one `section.key` edit.
///
/// An empty section (`".title"`) is a validation error, never a row under `""`.
fn change_row(path: &str, change: &ContentChange) -> Result<ContentRow, CmsError> {
    let (section, key) = split_path(path);
    if section.is_empty() {
        return Err(CmsError::validation(format!("Invalid content path: {path:?}")));
    }
    Ok(ContentRow::new(section, key, change.en.clone(), change.es.clone()))
}

/// Rows for every English default, paired with the Spanish default at the
/// same path (empty when Spanish has none).
pub fn seed_rows(defaults: &Translations) -> Vec<ContentRow> {
    defaults
        .en
        .flatten()
        .into_iter()
        .map(|entry| {
            let path = format!("{}.{}", entry.section, entry.key);
            let es = defaults.es.get_nested(&path).unwrap_or_default().to_string();
            ContentRow::new(entry.section, entry.key, Some(entry.value), Some(es))
        })
        .collect()
}
