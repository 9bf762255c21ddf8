//! Recipe form visibility toggle.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::dom::PageDom;
use super::{DISPLAY_HIDDEN, DISPLAY_SHOWN, ids};

/// Visibility of the recipe entry form after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Show the recipe form if its inline display is `none`, hide it otherwise.
///
/// A form with no inline display counts as visible, so the first toggle on
/// such a page hides it. Returns `None` when the form is missing.
pub fn toggle_form(dom: &impl PageDom) -> Option<Visibility> {
    let current = dom.display(ids::RECIPE_FORM)?;
    let next = if current == DISPLAY_HIDDEN { Visibility::Shown } else { Visibility::Hidden };
    let value = match next {
        Visibility::Shown => DISPLAY_SHOWN,
        Visibility::Hidden => DISPLAY_HIDDEN,
    };
    dom.set_display(ids::RECIPE_FORM, value);
    Some(next)
}
