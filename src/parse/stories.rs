//! Story page extraction.

use scraper::Html;

use super::picture::collect_picture_candidates;
use crate::config::MAX_STORY_COUNT;
use crate::models::select_best_picture;

/// Substrings marking story items on a story page.
///
/// Every occurrence counts. No marker is a substring of another, but a single
/// element carrying two markers (`class="StoryTile" data-story-id=..`) counts twice.
pub const STORY_MARKERS: &[&str] = &[
    "\"storyId\"",
    "data-story-id",
    "StoryTile",
    "story-thumbnail",
    "\"snapMediaType\"",
];

/// Number of story marker occurrences in the page, capped at `MAX_STORY_COUNT`.
pub fn count_stories(html: &str) -> u32 {
    let count: usize = STORY_MARKERS
        .iter()
        .map(|marker| html.matches(marker).count())
        .sum();
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .min(MAX_STORY_COUNT)
}

/// Best avatar URL found on a story page, if any.
pub fn extract_story_avatar(document: &Html, html: &str) -> Option<String> {
    let candidates = collect_picture_candidates(document, html);
    select_best_picture(&candidates).map(|candidate| candidate.url.clone())
}
