//! Shared recipe DTOs for the cookbook JSON endpoint.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! The server serializes [`Recipe`] for `GET /recipes/{id}` and the browser
//! controller deserializes the same shape into the detail panel.


use std::fmt;

use serde::{Deserialize, Serialize};

/// Path prefix shared by recipe links and the detail endpoint.
pub const RECIPES_PATH: &str = "/recipes";

/// Units offered by the ingredient unit selector, in display order.
pub const UNITS: [&str; 6] = ["g", "ml", "oz", "tsp", "tbsp", "cup"];

/// One ingredient line of a recipe. All fields are free text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: String,
    pub unit: String,
    pub name: String,
}

impl Ingredient {
    #[must_use]
    pub fn new(quantity: impl Into<String>, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self { quantity: quantity.into(), unit: unit.into(), name: name.into() }
    }
}

/// Renders as `"<quantity> <unit> <name>"`, the detail panel's list item text.
impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// Body of `GET /recipes/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredients in insertion order.
    pub ingredients: Vec<Ingredient>,
    pub directions: String,
}

/// Build the detail endpoint path for a recipe identifier.
#[must_use]
pub fn recipe_path(id: impl fmt::Display) -> String {
    format!("{RECIPES_PATH}/{id}")
}
