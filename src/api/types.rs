//! API state and response bodies.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::initialization::init_client;

/// Shared state for the API handlers.
///
/// Everything except the counters is immutable after startup.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
    pub fetcher: Arc<Fetcher>,
    pub extractor: Arc<Extractor>,
    pub stats: Arc<ProcessingStats>,
    pub started_at: Arc<Instant>,
    pub requests_served: Arc<AtomicUsize>,
}

impl ApiState {
    /// Builds the HTTP client, fetcher and extractor for a configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built or a
    /// configured label table does not compile.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let stats = Arc::new(ProcessingStats::new());
        let client = init_client(&config)?;
        let fetcher = Fetcher::new(client, &config, Arc::clone(&stats));
        let extractor = Extractor::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(extractor),
            stats,
            started_at: Arc::new(Instant::now()),
            requests_served: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn owner(&self) -> String {
        self.config.owner.clone()
    }
}

/// Envelope around a profile record or an extraction failure.
///
/// Success: `{"success":true,"data":{..},"Owner":..,"response_time_ms":..}`.
/// Failure: `{"success":false,"error":..,"Owner":..}`.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
}

impl<T: Serialize> ResponseEnvelope<T> {
    pub fn ok(data: T, owner: String, response_time_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            owner,
            response_time_ms: Some(response_time_ms),
        }
    }

    pub fn failure(error: impl Into<String>, owner: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            owner,
            response_time_ms: None,
        }
    }
}

/// JSON response for `/`
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub api: &'static str,
    pub status: &'static str,
    #[serde(rename = "Owner")]
    pub owner: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// JSON response for `/check/{username}`
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    pub username: String,
    pub exists: bool,
    /// Omitted when the check itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapcode_url: Option<String>,
    #[serde(rename = "Owner")]
    pub owner: String,
}

/// JSON response for `/image/{username}`
#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub success: bool,
    pub username: String,
    #[serde(flatten)]
    pub body: ImageBody,
    #[serde(rename = "Owner")]
    pub owner: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ImageBody {
    Found {
        profile_picture_url: Option<String>,
        snapcode_url: String,
    },
    Missing {
        error: &'static str,
    },
}

/// JSON response for `/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub requests_served: usize,
    pub uptime_seconds: f64,
    pub errors: CounterGroup,
    pub warnings: CounterGroup,
    pub info: CounterGroup,
}

/// One family of counters with its total.
#[derive(Debug, Serialize)]
pub struct CounterGroup {
    pub total: usize,
    #[serde(flatten)]
    pub counts: BTreeMap<&'static str, usize>,
}

impl CounterGroup {
    pub fn new(counts: BTreeMap<&'static str, usize>) -> Self {
        Self {
            total: counts.values().sum(),
            counts,
        }
    }
}
