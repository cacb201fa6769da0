//! URL template interpolation.

use url::form_urlencoded::byte_serialize;

use super::constants::{SNAPCODE_URL_TEMPLATE, USERNAME_PLACEHOLDER};

/// Substitutes the percent-encoded username into a URL template.
pub fn interpolate_username(template: &str, username: &str) -> String {
    let encoded: String = byte_serialize(username.as_bytes()).collect();
    template.replace(USERNAME_PLACEHOLDER, &encoded)
}

/// Snapcode image URL for a username.
pub fn snapcode_url(username: &str) -> String {
    interpolate_username(SNAPCODE_URL_TEMPLATE, username)
}
