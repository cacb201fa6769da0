//! Profile extraction.
//!
//! The extractor turns the two raw pages of one username into an
//! `ExtractedRecord`:
//! 1. Username-derived fields (`username`, `profile_url`, `snapcode_url`)
//! 2. Profile page rules, each field from its own fallback chain
//! 3. Story page: presence, story count, and a replacement avatar when the profile
//!    yielded no real picture
//! 4. Completeness score
//!
//! Extraction never fails. A page that is absent, malformed or missing every
//! pattern simply leaves its fields `null`.

mod score;

use log::debug;
use scraper::Html;

use crate::config::{interpolate_username, snapcode_url, Config};
use crate::error_handling::InitializationError;
use crate::fetch::RawPage;
use crate::models::{select_best_picture, ExtractedRecord, PictureCandidate, PictureQuality};
use crate::parse::{
    collect_picture_candidates, count_stories, display_name_from_title, extract_bitmoji_url,
    extract_friend_count, extract_location, extract_meta_description, extract_snap_score,
    extract_story_avatar, extract_title, is_verified, DescriptionRules,
};

pub use score::{completeness_score, MAX_COMPLETENESS_SCORE};

/// Source label of a picture taken from the story page.
pub const STORY_AVATAR_SOURCE: &str = "story-avatar";
/// Source label of the snapcode fallback candidate.
pub const SNAPCODE_SOURCE: &str = "snapcode";

/// An extracted record plus where its picture came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub record: ExtractedRecord,
    /// Rule that produced `profile_picture_url`, if any
    pub picture_source: Option<&'static str>,
}

/// Runs the extraction rules. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Extractor {
    profile_url_template: String,
    description_rules: DescriptionRules,
}

impl Extractor {
    /// Compiles the configured label tables.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::ExtractionRuleError` if a label table cannot be
    /// compiled into a pattern.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let description_rules =
            DescriptionRules::new(&config.subscriber_labels, &config.website_labels)?;
        Ok(Self {
            profile_url_template: config.profile_url_template.clone(),
            description_rules,
        })
    }

    /// Builds the record for `username` from its profile and story pages.
    pub fn extract(&self, username: &str, profile: &RawPage, story: &RawPage) -> ExtractedRecord {
        self.extract_detailed(username, profile, story).record
    }

    /// Like `extract`, but also reports which rule supplied the picture.
    pub fn extract_detailed(
        &self,
        username: &str,
        profile: &RawPage,
        story: &RawPage,
    ) -> Extraction {
        let mut record = ExtractedRecord::empty(
            username,
            interpolate_username(&self.profile_url_template, username),
            snapcode_url(username),
        );
        record.exists = profile.is_present();

        let mut picture_source = None;
        if let Some(html) = profile.body() {
            picture_source = self.apply_profile_page(&mut record, html);
        }
        if let Some(html) = story.body() {
            if let Some(source) = apply_story_page(&mut record, html) {
                picture_source = Some(source);
            }
        }

        record.profile_completeness_score = completeness_score(&record);
        debug!(
            "Extracted {}: exists={}, stories={}, picture={:?}, score={}",
            username,
            record.exists,
            record.story_count,
            picture_source,
            record.profile_completeness_score
        );

        Extraction {
            record,
            picture_source,
        }
    }

    /// Fills the profile-page fields; returns the picture's source rule.
    fn apply_profile_page(&self, record: &mut ExtractedRecord, html: &str) -> Option<&'static str> {
        let document = Html::parse_document(html);

        record.display_name =
            extract_title(&document).and_then(|title| display_name_from_title(&title, &record.username));
        record.description = extract_meta_description(&document);

        let mut candidates = collect_picture_candidates(&document, html);
        candidates.push(PictureCandidate::new(
            record.snapcode_url.clone(),
            PictureQuality::Low,
            SNAPCODE_SOURCE,
        ));
        let best = select_best_picture(&candidates);
        record.profile_picture_url = best.map(|candidate| candidate.url.clone());

        record.bitmoji_url = extract_bitmoji_url(html);
        record.snap_score = extract_snap_score(html);
        record.friend_count = extract_friend_count(html);
        record.is_verified = is_verified(html);

        if let Some(description) = record.description.as_deref() {
            record.subscriber_count = self.description_rules.subscriber_count(description);
            record.location = extract_location(description);
            record.website = self.description_rules.website(description);
        }

        best.map(|candidate| candidate.source)
    }
}

/// Fills the story fields; returns `Some` when the story avatar became the picture.
fn apply_story_page(record: &mut ExtractedRecord, html: &str) -> Option<&'static str> {
    record.has_stories = true;
    record.story_count = count_stories(html);

    if record.has_real_picture() {
        return None;
    }
    let document = Html::parse_document(html);
    let avatar = extract_story_avatar(&document, html)?;
    record.profile_picture_url = Some(avatar);
    Some(STORY_AVATAR_SOURCE)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
