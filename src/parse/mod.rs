//! HTML parsing and data extraction.
//!
//! This module holds the individual extraction rules applied to raw profile and
//! story pages:
//! - Title, meta description and image meta tags (CSS selectors via `scraper`)
//! - Profile picture candidates (meta tags, `<img>` heuristics, CSS, JSON-LD)
//! - Values embedded in inline scripts (Bitmoji, snap score, friend count, verified)
//! - Description-derived fields (subscribers, location, website)
//! - Story markers and story-page avatars
//!
//! Every rule is a pure function returning `Option`/`Vec`; a miss is never an error.

mod description;
mod embedded;
mod html;
mod picture;
mod stories;
mod structured;

// Re-export public API
pub use description::{extract_location, DescriptionRules};
pub use embedded::{extract_bitmoji_url, extract_friend_count, extract_snap_score, is_verified};
pub use html::{display_name_from_title, extract_meta_description, extract_title};
pub use picture::collect_picture_candidates;
pub use stories::{count_stories, extract_story_avatar};
