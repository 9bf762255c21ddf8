//! Networking for the recipe detail endpoint.

pub mod api;
