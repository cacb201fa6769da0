//! Data types shared by the extractor and the HTTP layer.

use serde::Serialize;

/// Normalized result of scraping one username.
///
/// Every field is always serialized: fields that could not be extracted are
/// `null`, never omitted. The key set is exactly `config::FIELD_KEYS`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    pub username: String,
    pub profile_url: String,
    /// True iff the profile page was fetched successfully
    pub exists: bool,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_picture_url: Option<String>,
    pub bitmoji_url: Option<String>,
    pub snapcode_url: String,
    /// Kept verbatim as written on the page, e.g. `4.2k`
    pub subscriber_count: Option<String>,
    pub snap_score: Option<u64>,
    pub friend_count: Option<u64>,
    /// True iff the story page was fetched successfully
    pub has_stories: bool,
    pub story_count: u32,
    pub is_verified: bool,
    pub profile_completeness_score: u8,
}

impl ExtractedRecord {
    /// A record with only the username-derived fields filled in.
    pub fn empty(username: &str, profile_url: String, snapcode_url: String) -> Self {
        Self {
            username: username.to_string(),
            profile_url,
            exists: false,
            display_name: None,
            description: None,
            location: None,
            website: None,
            profile_picture_url: None,
            bitmoji_url: None,
            snapcode_url,
            subscriber_count: None,
            snap_score: None,
            friend_count: None,
            has_stories: false,
            story_count: 0,
            is_verified: false,
            profile_completeness_score: 0,
        }
    }

    /// Whether the chosen picture is a real picture rather than the snapcode.
    pub fn has_real_picture(&self) -> bool {
        self.profile_picture_url
            .as_deref()
            .is_some_and(|url| url != self.snapcode_url)
    }
}

/// Confidence tier of a profile picture candidate.
///
/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PictureQuality {
    /// Snapcode fallback
    Low,
    /// Heuristic `<img>` / CSS matches
    Medium,
    /// Structured meta tags and JSON-LD
    High,
}

/// A profile picture URL together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureCandidate {
    pub url: String,
    pub quality: PictureQuality,
    /// Name of the rule that produced the candidate (`og:image`, `img`, ...)
    pub source: &'static str,
}

impl PictureCandidate {
    pub fn new(url: impl Into<String>, quality: PictureQuality, source: &'static str) -> Self {
        Self {
            url: url.into(),
            quality,
            source,
        }
    }
}

/// Picks the best candidate: highest quality, earliest discovered on ties.
pub fn select_best_picture(candidates: &[PictureCandidate]) -> Option<&PictureCandidate> {
    // max_by_key returns the last maximum, so compare on reversed index
    candidates
        .iter()
        .enumerate()
        .max_by_key(|(index, candidate)| (candidate.quality, std::cmp::Reverse(*index)))
        .map(|(_, candidate)| candidate)
}
