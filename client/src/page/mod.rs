//! Page behaviors and the DOM contract they bind to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders markup carrying the element ids in [`ids`]; each
//! behavior module here mutates that markup through [`dom::PageDom`]. The
//! behaviors are independent and none calls another. `browser` wires them to
//! click events once at load.

pub mod dom;
pub mod form;
pub mod ingredients;
pub mod recipe_details;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
pub(crate) mod memory;

/// Element ids shared by the server-rendered page and the behaviors.
pub mod ids {
    pub const DARK_MODE_TOGGLE: &str = "dark-mode-toggle";
    pub const TOGGLE_FORM: &str = "toggle-form";
    pub const RECIPE_FORM: &str = "recipe-form";
    pub const ADD_INGREDIENT: &str = "add-ingredient";
    pub const INGREDIENTS_SECTION: &str = "ingredients-section";
    pub const RECIPE_TITLE: &str = "recipe-title";
    pub const INGREDIENTS_LIST: &str = "ingredients-list";
    pub const DIRECTIONS_TEXT: &str = "directions-text";
    pub const RECIPE_DETAILS: &str = "recipe-details";
}

/// Class on the container whose anchors open the detail panel.
pub const RECIPE_LIST_CLASS: &str = "recipe-list";

/// Selector for recipe links bound at load.
pub const RECIPE_LINK_SELECTOR: &str = ".recipe-list a";

/// Inline `display` value of a hidden element.
pub const DISPLAY_HIDDEN: &str = "none";

/// Inline `display` value of a revealed element.
pub const DISPLAY_SHOWN: &str = "block";
