//! Client-local key/value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dark-mode preference is the only persisted client state. Behaviors
//! take a [`PreferenceStore`] so tests can substitute [`MemoryStore`] for the
//! browser's `localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value store scoped to the page origin.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. Failures are swallowed.
    fn set_item(&self, key: &str, value: &str);
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`. Absent storage (privacy mode, sandboxed frames)
/// reads as empty and drops writes.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    #[must_use]
    pub fn new(window: &web_sys::Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
}
