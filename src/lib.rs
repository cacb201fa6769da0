//! snap_profile library: public Snapchat profile scraping as a JSON service
//!
//! Given a username, the service fetches the public profile page and the public
//! story page, recovers whatever fields it can from the raw markup (display name,
//! description, picture, Bitmoji, counts, verification, stories) and returns them
//! as a fixed-shape record with a completeness score.
//!
//! # Example
//!
//! ```no_run
//! use snap_profile::{Config, Extractor, RawPage};
//!
//! let extractor = Extractor::new(&Config::default()).unwrap();
//! let profile = RawPage::Present("<title>Alice (alice)</title>".to_string());
//! let record = extractor.extract("alice", &profile, &RawPage::Absent);
//! assert_eq!(record.display_name.as_deref(), Some("Alice"));
//! ```
//!
//! # Requirements
//!
//! Fetching and serving require a Tokio runtime. Extraction itself is synchronous.

pub mod api;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
mod parse;
mod utils;

// Re-export public API
pub use api::{build_router, start_server, ApiState};
pub use config::{Config, LogFormat, LogLevel};
pub use extract::{completeness_score, Extractor};
pub use fetch::{Fetcher, RawPage};
pub use models::{ExtractedRecord, PictureCandidate, PictureQuality};

/// Builds the shared state for `config` and serves the API until the process exits.
///
/// # Errors
///
/// Returns an error if initialization fails, the listen address cannot be bound,
/// or the server stops with an error.
pub async fn serve(config: Config) -> Result<(), anyhow::Error> {
    log::info!(
        "Starting {} with profile template {}",
        config::API_NAME,
        config.profile_url_template
    );
    let state = ApiState::new(config)?;
    start_server(state).await
}
