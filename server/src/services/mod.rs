//! Domain services backed by Postgres.

pub mod recipe;
