//! Profile completeness scoring.

use crate::models::ExtractedRecord;

/// Upper bound of the completeness score.
pub const MAX_COMPLETENESS_SCORE: u8 = 100;

// Points per recovered field
const DISPLAY_NAME_POINTS: u8 = 20;
const REAL_PICTURE_POINTS: u8 = 25;
const DESCRIPTION_POINTS: u8 = 15;
const BITMOJI_POINTS: u8 = 20;
const SNAP_SCORE_POINTS: u8 = 10;
const STORIES_POINTS: u8 = 10;

/// Heuristic 0-100 score of how much of the profile was recovered.
///
/// A snapcode picture earns nothing: it exists for every username.
pub fn completeness_score(record: &ExtractedRecord) -> u8 {
    let table = [
        (record.display_name.is_some(), DISPLAY_NAME_POINTS),
        (record.has_real_picture(), REAL_PICTURE_POINTS),
        (record.description.is_some(), DESCRIPTION_POINTS),
        (record.bitmoji_url.is_some(), BITMOJI_POINTS),
        (record.snap_score.is_some(), SNAP_SCORE_POINTS),
        (record.has_stories, STORIES_POINTS),
    ];
    let total: u32 = table
        .iter()
        .filter(|(qualifies, _)| *qualifies)
        .map(|&(_, points)| u32::from(points))
        .sum();
    total.min(u32::from(MAX_COMPLETENESS_SCORE)) as u8
}
