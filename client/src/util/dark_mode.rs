//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from client-local storage and applies the
//! `dark-mode` class to `<body>`. Toggle flips that class and writes the new
//! state back as `"true"` or `"false"`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::page::dom::PageDom;
use crate::util::storage::PreferenceStore;

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Class applied to `<body>` while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Read the dark mode preference. Only the exact string `"true"` counts as on.
pub fn read_preference(store: &impl PreferenceStore) -> bool {
    store.get_item(STORAGE_KEY).is_some_and(|val| val == "true")
}

/// Apply a persisted preference at load without touching storage.
///
/// Returns whether dark mode is now on.
pub fn restore(dom: &impl PageDom, store: &impl PreferenceStore) -> bool {
    let enabled = read_preference(store);
    if enabled {
        dom.add_body_class(DARK_MODE_CLASS);
    }
    enabled
}

/// Toggle dark mode and persist the new preference.
///
/// Returns the new state.
pub fn toggle(dom: &impl PageDom, store: &impl PreferenceStore) -> bool {
    let next = dom.toggle_body_class(DARK_MODE_CLASS);
    store.set_item(STORAGE_KEY, if next { "true" } else { "false" });
    log::debug!("dark mode {}", if next { "on" } else { "off" });
    next
}
