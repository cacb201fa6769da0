//! Configuration constants.
//!
//! This module defines the constants used throughout the service: upstream URL
//! templates, per-request timeouts, the attribution string and the fixed field-key
//! set of the extracted record.

/// Placeholder substituted with the (percent-encoded) username in URL templates.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Default profile page URL template.
pub const DEFAULT_PROFILE_URL_TEMPLATE: &str = "https://www.snapchat.com/add/{username}";

/// Default public stories page URL template.
pub const DEFAULT_STORY_URL_TEMPLATE: &str = "https://story.snapchat.com/@{username}";

/// Snapcode image URL template.
///
/// Not configurable: the snapcode URL is a pure function of the username and is
/// part of the response contract.
pub const SNAPCODE_URL_TEMPLATE: &str =
    "https://app.snapchat.com/web/deeplink/snapcode?username={username}&type=PNG";

// Network operation timeouts
/// Profile page GET timeout in seconds
pub const PROFILE_TIMEOUT_SECS: u64 = 10;
/// Story page GET timeout in seconds
pub const STORY_TIMEOUT_SECS: u64 = 8;
/// Existence check (HEAD) timeout in seconds
pub const CHECK_TIMEOUT_SECS: u64 = 5;

/// Maximum number of redirect hops followed by the existence check
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Default attribution string carried by every response envelope.
pub const DEFAULT_OWNER: &str = "@GoatThunder";

/// Default listen address and port
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Name reported by the service descriptor endpoint
pub const API_NAME: &str = "Snapchat Profile API";

/// Upper bound on the number of story markers counted on a story page
pub const MAX_STORY_COUNT: u32 = 50;

/// Words for "subscribers", tried in order against the profile description.
///
/// The non-Latin (Hindi) label comes first, then English.
pub const DEFAULT_SUBSCRIBER_LABELS: &[&str] = &["सब्सक्राइबर", "subscribers"];

/// Platform names recognized as `<label>: <token>` website hints in a description.
pub const DEFAULT_WEBSITE_LABELS: &[&str] = &["instagram", "tiktok", "youtube"];

/// Every key of the serialized extracted record, in output order.
pub const FIELD_KEYS: &[&str] = &[
    "username",
    "profile_url",
    "exists",
    "display_name",
    "description",
    "location",
    "website",
    "profile_picture_url",
    "bitmoji_url",
    "snapcode_url",
    "subscriber_count",
    "snap_score",
    "friend_count",
    "has_stories",
    "story_count",
    "is_verified",
    "profile_completeness_score",
];
