//! Outbound request header set.
//!
//! The same headers are sent with every upstream request (profile page, story page
//! and existence check). The User-Agent is configured on the client itself.

/// Accept header sent with page fetches
pub const HEADER_ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
/// Accept-Language header sent with page fetches
pub const HEADER_ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Headers applied to every outbound request, as (name, value) pairs.
pub const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("accept", HEADER_ACCEPT_VALUE),
    ("accept-language", HEADER_ACCEPT_LANGUAGE_VALUE),
];
