//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the service.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured lookup label produced an invalid pattern.
    #[error("Extraction rule compilation error: {0}")]
    ExtractionRuleError(#[from] regex::Error),
}

/// Failure of a single outbound request.
///
/// The page fetches never surface this type: they collapse it into an absent page.
/// Only the existence check reports it to its caller.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The upstream answered with a status other than 200 OK.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Transport-level failure (connect, timeout, body, redirect, ...).
    #[error("Upstream request failed: {0}")]
    Request(#[from] ReqwestError),
}

impl FetchError {
    /// Categorizes the failure for the processing counters.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Status(status) => super::categorize_status(*status),
            FetchError::Request(e) => super::categorize_reqwest_error(e),
        }
    }
}

/// Unexpected fault while turning raw pages into a record.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The extraction task panicked or was cancelled.
    #[error("Extraction failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Types of errors that can occur while serving a request.
///
/// Fetch failures are not fatal to a request (the page is treated as absent), but
/// they are still counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Status code errors
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestTooManyRequests,   // 429 Too Many Requests
    HttpRequestServerError,       // any 5xx
    HttpRequestStatusError,       // any other non-200 status
    // Extraction
    ExtractionFailure,
}

/// Types of warnings that can occur while extracting a present profile page.
///
/// Warnings indicate missing optional data that doesn't prevent a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingTitle,           // Profile page has no usable title
    MissingMetaDescription, // Profile page has no description meta tag
    MissingProfilePicture,  // Only the snapcode fallback was available
}

/// Types of informational metrics recorded per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ProfileFound,
    ProfileNotFound,
    StoriesFound,
    StoryAvatarUsed, // Picture taken from the story page
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestServerError => "Upstream server error (5xx)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::ExtractionFailure => "Extraction failure",
        }
    }

    /// Snake-case key used in the `/status` output.
    pub fn key(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "builder",
            ErrorType::HttpRequestRedirectError => "redirect",
            ErrorType::HttpRequestTimeoutError => "timeout",
            ErrorType::HttpRequestConnectError => "connect",
            ErrorType::HttpRequestBodyError => "body",
            ErrorType::HttpRequestDecodeError => "decode",
            ErrorType::HttpRequestOtherError => "other",
            ErrorType::HttpRequestBotDetectionError => "forbidden",
            ErrorType::HttpRequestNotFound => "not_found",
            ErrorType::HttpRequestTooManyRequests => "too_many_requests",
            ErrorType::HttpRequestServerError => "server_error",
            ErrorType::HttpRequestStatusError => "status",
            ErrorType::ExtractionFailure => "extraction_failure",
        }
    }
}

impl WarningType {
    pub fn key(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "missing_title",
            WarningType::MissingMetaDescription => "missing_meta_description",
            WarningType::MissingProfilePicture => "missing_profile_picture",
        }
    }
}

impl InfoType {
    pub fn key(&self) -> &'static str {
        match self {
            InfoType::ProfileFound => "profile_found",
            InfoType::ProfileNotFound => "profile_not_found",
            InfoType::StoriesFound => "stories_found",
            InfoType::StoryAvatarUsed => "story_avatar_used",
        }
    }
}
