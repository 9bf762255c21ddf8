//! Browser behavior controller for the cookbook page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the cookbook page; this crate compiles to WASM and
//! attaches four independent behaviors to it on load: the dark-mode toggle,
//! the recipe form visibility toggle, the ingredient row adder, and the recipe
//! detail loader.
//!
//! All behavior logic is written against the [`page::dom::PageDom`],
//! [`util::storage::PreferenceStore`] and [`net::api::RecipeSource`] seams so it
//! compiles and tests natively. Browser glue lives behind the `hydrate` feature.

pub mod net;
pub mod page;
pub mod util;

/// WASM entry point: install logging and bind the page behaviors.
///
/// # Errors
///
/// Returns the JS error if the window or document is unavailable.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    page::browser::bind_page()
}
