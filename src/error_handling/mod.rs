//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: Upstream fetch failures and extraction faults
//! - **Warnings**: Missing optional data on a present profile page
//! - **Info**: Informational metrics (profile found, stories found, etc.)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, ExtractionError, FetchError, InfoType, InitializationError, WarningType,
};
