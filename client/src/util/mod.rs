//! Utility helpers shared across page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage concerns from the page behaviors
//! to improve reuse and testability.

pub mod dark_mode;
pub mod storage;
