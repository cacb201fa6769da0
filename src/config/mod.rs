//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (URL templates, timeouts, field keys, etc.)
//! - The outbound request header set
//! - URL template interpolation
//! - CLI option types and parsing

mod constants;
mod headers;
mod templates;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use templates::{interpolate_username, snapcode_url};
pub use types::{Config, LogFormat, LogLevel};
