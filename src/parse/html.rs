//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic HTML elements:
//! - Page title and the display name derived from it
//! - Meta description
//! - Open Graph / Twitter Card image meta tags

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const OG_IMAGE_SELECTOR_STR: &str = "meta[property='og:image']";
const TWITTER_IMAGE_SELECTOR_STR: &str =
    "meta[name='twitter:image'], meta[property='twitter:image']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_IMAGE_SELECTOR_STR, "OG_IMAGE_SELECTOR"));
static TWITTER_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(TWITTER_IMAGE_SELECTOR_STR, "TWITTER_IMAGE_SELECTOR")
});

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed, or `None` when the
/// element is missing or blank.
pub fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    // text() decodes entities and flattens nested nodes
    let title = element.text().collect::<String>().trim().to_string();
    log::debug!("Extracted title text: '{}'", title);
    non_empty(title)
}

/// Derives the display name from a page title.
///
/// Titles look like `Alice (alice)` or `Alice (@alice) on Snapchat`. When the
/// username appears in parentheses, everything from the parenthesis on is
/// dropped; otherwise the trimmed title is used verbatim.
pub fn display_name_from_title(title: &str, username: &str) -> Option<String> {
    let pattern = format!(r"(?i)\(\s*@?{}\s*\)", regex::escape(username));
    let name = match Regex::new(&pattern).ok().and_then(|re| re.find(title)) {
        Some(m) => title[..m.start()].trim(),
        None => title.trim(),
    };
    non_empty(name.to_string())
}

/// Extracts the meta description from an HTML document.
///
/// Searches for `<meta name="description">` and returns its content, trimmed of
/// whitespace. Blank content counts as missing.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    meta_content(document, &META_DESCRIPTION_SELECTOR)
}

/// Content of the `og:image` meta tag.
pub fn extract_og_image(document: &Html) -> Option<String> {
    meta_content(document, &OG_IMAGE_SELECTOR)
}

/// Content of the `twitter:image` meta tag (`name` or `property` attribute).
pub fn extract_twitter_image(document: &Html) -> Option<String> {
    meta_content(document, &TWITTER_IMAGE_SELECTOR)
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
