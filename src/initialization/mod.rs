//! Startup resource setup.
//!
//! This module provides the functions that build the shared, immutable resources
//! every request uses:
//! - Logger
//! - Upstream HTTP client
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
