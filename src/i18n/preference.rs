//! Active language preference with change notifications.
//!
//! [`LanguagePreference`] keeps the visitor's language in a
//! [`PreferenceStore`] under [`STORAGE_KEY`], mirrors it into a document tag
//! (the `data-lang` attribute used for styling hooks), and notifies
//! subscribers when it changes.
//!
//! Notifications are synchronous: `set` calls every subscriber registered at
//! the moment of the call, in registration order, on the calling thread, and
//! returns after the last one. Subscribers added or removed from inside a
//! callback take effect for the next `set`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::language::Language;

/// Key the preference is persisted under.
pub const STORAGE_KEY: &str = "multiedge-lang";

/// Persistence medium for the preference (browser storage, a cookie, ...).
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Store pre-seeded with one raw value for [`STORAGE_KEY`].
    pub fn with_value(value: impl Into<String>) -> Self {
        let store = Self::default();
        store.values.lock().insert(STORAGE_KEY.to_string(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}

/// Handle returned by [`LanguagePreference::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(Language) + Send + Sync>;

pub struct LanguagePreference<S: PreferenceStore> {
    store: S,
    document_lang: RwLock<Option<Language>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl<S: PreferenceStore> fmt::Debug for LanguagePreference<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("document_lang", &*self.document_lang.read())
            .field("listeners", &self.listeners.lock().len())
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            document_lang: RwLock::new(None),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn stored(&self) -> Option<Language> {
        self.store
            .get(STORAGE_KEY)
            .as_deref()
            .and_then(Language::parse)
    }

    /// The persisted language, or English when nothing valid is stored.
    #[allow(dead_code)]
    pub fn current(&self) -> Language {
        self.stored().unwrap_or_default()
    }

    /// The persisted language, or one derived from the locale hint.
    ///
    /// The derived value is not written back.
    pub fn default_language(&self, locale_hint: Option<&str>) -> Language {
        self.stored()
            .unwrap_or_else(|| locale_hint.map(Language::from_locale_hint).unwrap_or_default())
    }

    /// Persist `language`, tag the document and notify subscribers.
    #[allow(dead_code)]
    pub fn set(&self, language: Language) {
        self.store.set(STORAGE_KEY, language.as_str());
        *self.document_lang.write() = Some(language);

        // Snapshot so callbacks can (un)subscribe without deadlocking.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        debug!("Language set to {}, notifying {} subscribers", language, listeners.len());
        for listener in listeners {
            listener(language);
        }
    }

    /// First-render setup: persist the default if nothing is stored yet and
    /// tag the document before anything else reads it.
    #[allow(dead_code)]
    pub fn bootstrap(&self, locale_hint: Option<&str>) -> Language {
        let language = match self.store.get(STORAGE_KEY) {
            Some(raw) => Language::parse(&raw).unwrap_or_default(),
            None => {
                let language = self.default_language(locale_hint);
                self.store.set(STORAGE_KEY, language.as_str());
                language
            }
        };

        *self.document_lang.write() = Some(language);
        language
    }

    /// Language currently tagged on the document, if any.
    #[allow(dead_code)]
    pub fn document_language(&self) -> Option<Language> {
        *self.document_lang.read()
    }

    #[allow(dead_code)]
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Language) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if the handle was already removed.
    #[allow(dead_code)]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}
