//! Utility functions.
//!
//! This module provides:
//! - CSS selector and regex compilation helpers
//! - Elapsed-time helpers

mod selector;
mod timing;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
pub use timing::{duration_to_ms, elapsed_ms};
