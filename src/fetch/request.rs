//! HTTP request building.

use reqwest::header::{HeaderName, HeaderValue};

use crate::config::REQUEST_HEADERS;

/// The fixed browser-like header set sent with every upstream request.
///
/// The User-Agent is set on the client; everything else is applied per request so
/// the page fetches and the existence check present the same fingerprint.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        REQUEST_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        REQUEST_HEADERS
            .iter()
            .fold(builder, |builder, &(name, value)| {
                builder.header(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                )
            })
    }
}
