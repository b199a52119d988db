//! Injected key-value persistence for settings records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Settings pages read and write whole records through [`SettingsStore`] so
//! persistence can be swapped for an in-memory store in tests. The browser
//! implementation wraps `localStorage` and is hydrate-only; server renders
//! see an inert store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys for the four independent settings records.
pub const PROFILE_KEY: &str = "legalsuite_profile";
pub const NOTIFICATIONS_KEY: &str = "legalsuite_notifications";
pub const THEME_KEY: &str = "legalsuite_theme";
pub const WORKSPACE_KEY: &str = "legalsuite_workspace";

/// Flat key-value persistence. Values are JSON strings written wholesale;
/// there is no schema versioning or migration.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// `localStorage`-backed store. Every operation is best-effort and no-ops
/// outside a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl SettingsStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn clear(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// Shareable store handle provided through context so pages receive their
/// persistence backend instead of reaching for the browser directly.
#[derive(Clone)]
pub struct StoreHandle(pub std::sync::Arc<dyn SettingsStore>);

impl StoreHandle {
    /// Browser-backed store for the running app.
    pub fn browser() -> Self {
        Self(std::sync::Arc::new(LocalStorage))
    }

    /// Isolated in-memory store, for tests.
    pub fn in_memory() -> Self {
        Self(std::sync::Arc::new(MemoryStore::default()))
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn SettingsStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Load a settings record, falling back to its default when the key is
/// missing or holds something unparseable.
pub fn load_record<T: DeserializeOwned + Default>(store: &dyn SettingsStore, key: &str) -> T {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Overwrite a settings record wholesale.
pub fn save_record<T: Serialize>(store: &dyn SettingsStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw);
    }
}
