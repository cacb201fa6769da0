//! Upstream page fetching.
//!
//! The fetcher issues the outbound requests for one username:
//! - GET of the profile page
//! - GET of the public story page
//! - HEAD existence check (redirects followed)
//!
//! Page fetches never fail: any transport error, timeout or non-200 status is
//! logged, counted and turned into `RawPage::Absent`. No request is retried.

mod request;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::config::{interpolate_username, Config};
use crate::error_handling::{FetchError, ProcessingStats};
use request::RequestHeaders;

/// Outcome of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPage {
    /// Fetch failed, timed out or returned a non-200 status.
    Absent,
    /// Body of a 200 response.
    Present(String),
}

impl RawPage {
    pub fn is_present(&self) -> bool {
        matches!(self, RawPage::Present(_))
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            RawPage::Present(body) => Some(body),
            RawPage::Absent => None,
        }
    }
}

impl From<Option<String>> for RawPage {
    fn from(body: Option<String>) -> Self {
        body.map_or(RawPage::Absent, RawPage::Present)
    }
}

/// Issues the upstream requests for a username.
///
/// Holds the shared HTTP client and the immutable URL templates and timeouts.
/// Cheap to share behind an `Arc`; it carries no per-request state.
pub struct Fetcher {
    client: reqwest::Client,
    profile_url_template: String,
    story_url_template: String,
    profile_timeout: Duration,
    story_timeout: Duration,
    check_timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl Fetcher {
    pub fn new(client: reqwest::Client, config: &Config, stats: Arc<ProcessingStats>) -> Self {
        debug!(
            "Fetcher using profile template '{}', story template '{}', headers {:?}",
            config.profile_url_template,
            config.story_url_template,
            RequestHeaders::as_vec()
        );
        Self {
            client,
            profile_url_template: config.profile_url_template.clone(),
            story_url_template: config.story_url_template.clone(),
            profile_timeout: config.profile_timeout(),
            story_timeout: config.story_timeout(),
            check_timeout: config.check_timeout(),
            stats,
        }
    }

    /// Profile page URL for a username.
    pub fn profile_url(&self, username: &str) -> String {
        interpolate_username(&self.profile_url_template, username)
    }

    /// Story page URL for a username.
    pub fn story_url(&self, username: &str) -> String {
        interpolate_username(&self.story_url_template, username)
    }

    /// Fetches the profile page.
    pub async fn fetch_profile_page(&self, username: &str) -> RawPage {
        self.get_page(&self.profile_url(username), self.profile_timeout, "profile")
            .await
    }

    /// Fetches the story page.
    pub async fn fetch_story_page(&self, username: &str) -> RawPage {
        self.get_page(&self.story_url(username), self.story_timeout, "story")
            .await
    }

    /// Fetches both pages concurrently; a failure of one never affects the other.
    pub async fn fetch_pages(&self, username: &str) -> (RawPage, RawPage) {
        tokio::join!(
            self.fetch_profile_page(username),
            self.fetch_story_page(username)
        )
    }

    /// HEAD request against the profile URL, following redirects.
    ///
    /// Returns whether the final response is 200 OK, or the transport error.
    pub async fn check_exists(&self, username: &str) -> Result<bool, FetchError> {
        let url = self.profile_url(username);
        let request = self.client.head(&url).timeout(self.check_timeout);
        let response = RequestHeaders::apply_to_request_builder(request)
            .send()
            .await
            .map_err(FetchError::from)
            .inspect_err(|e| self.record_failure("check", &url, e))?;
        debug!("Existence check for {} returned {}", url, response.status());
        Ok(response.status() == StatusCode::OK)
    }

    /// Existence check collapsed to a boolean; any failure reads as "does not exist".
    pub async fn head_check(&self, username: &str) -> bool {
        self.check_exists(username).await.unwrap_or(false)
    }

    async fn get_page(&self, url: &str, timeout: Duration, label: &str) -> RawPage {
        match self.try_get_page(url, timeout).await {
            Ok(body) => {
                debug!("Fetched {} page {} ({} bytes)", label, url, body.len());
                RawPage::Present(body)
            }
            Err(e) => {
                self.record_failure(label, url, &e);
                RawPage::Absent
            }
        }
    }

    async fn try_get_page(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let request = self.client.get(url).timeout(timeout);
        let response = RequestHeaders::apply_to_request_builder(request)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }

    fn record_failure(&self, label: &str, url: &str, error: &FetchError) {
        let error_type = error.error_type();
        self.stats.increment_error(error_type);
        match error {
            // A missing page is the normal answer for unknown usernames
            FetchError::Status(StatusCode::NOT_FOUND) => {
                debug!("{} page {} not found", label, url)
            }
            _ => warn!("{} fetch of {} failed ({}): {}", label, url, error_type, error),
        }
    }
}
