//! Dynamic ingredient rows for the recipe form.
//!
//! Every row is the same literal fragment: a quantity input, a unit select
//! and a name input. Field names repeat across rows (`ingredient_quantity[]`
//! and friends) and the form submission consumes them positionally.

#[cfg(test)]
#[path = "ingredients_test.rs"]
mod ingredients_test;

use cookbook_wire::UNITS;

use super::dom::PageDom;
use super::ids;

/// Class on each row's wrapper `<div>`.
pub const INGREDIENT_ROW_CLASS: &str = "ingredient";

pub const QUANTITY_FIELD: &str = "ingredient_quantity[]";
pub const UNIT_FIELD: &str = "ingredient_unit[]";
pub const NAME_FIELD: &str = "ingredient_name[]";

/// Inner markup of one ingredient row.
#[must_use]
pub fn ingredient_row_html() -> String {
    let options: String = UNITS
        .iter()
        .map(|unit| format!(r#"<option value="{unit}">{unit}</option>"#))
        .collect();
    format!(
        r#"<input type="text" name="{QUANTITY_FIELD}" placeholder="Quantity" required><select name="{UNIT_FIELD}">{options}</select><input type="text" name="{NAME_FIELD}" placeholder="Ingredient" required>"#
    )
}

/// Append one fresh ingredient row to the ingredients section.
pub fn add_ingredient_row(dom: &impl PageDom) {
    dom.append_html(ids::INGREDIENTS_SECTION, INGREDIENT_ROW_CLASS, &ingredient_row_html());
}
