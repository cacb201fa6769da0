//! Profile picture candidate discovery.
//!
//! Each rule looks at a different place in the page and yields zero or more
//! candidates tagged with a quality tier. Candidates are returned in discovery
//! order; picking one is left to `models::select_best_picture`.

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

use super::html::{extract_og_image, extract_twitter_image};
use super::structured::{extract_json_ld, json_ld_image};
use crate::models::{PictureCandidate, PictureQuality};
use crate::utils::compile_regex_unsafe;

const IMAGE_EXTENSION_PATTERN: &str = r"(?i)\.(?:jpe?g|png|gif|webp|avif)(?:[?#]|$)";
const IMG_TAG_PATTERN: &str = r"(?is)<img\b[^>]*>";
const IMG_SRC_PATTERN: &str = r#"(?i)\bsrc\s*=\s*["']([^"']+)["']"#;
const PROFILE_HINT_PATTERN: &str = r"(?i)profile|avatar";
const CSS_BACKGROUND_PATTERN: &str = r#"(?i)background(?:-image)?\s*:[^;"'>]*?url\(\s*(?:&quot;|["'])?([^"')\s]+?\.(?:jpe?g|png|gif|webp|avif)(?:\?[^"')\s]*)?)(?:&quot;|["'])?\s*\)"#;

static IMAGE_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMAGE_EXTENSION_PATTERN, "IMAGE_EXTENSION_RE"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMG_TAG_PATTERN, "IMG_TAG_RE"));
static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMG_SRC_PATTERN, "IMG_SRC_RE"));
static PROFILE_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PROFILE_HINT_PATTERN, "PROFILE_HINT_RE"));
static CSS_BACKGROUND_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CSS_BACKGROUND_PATTERN, "CSS_BACKGROUND_RE"));

/// Whether a URL path ends in a known image extension.
pub fn has_image_extension(url: &str) -> bool {
    IMAGE_EXTENSION_RE.is_match(url)
}

/// `og:image` candidate, only when it points at a known image type.
pub fn og_image_candidate(document: &Html) -> Option<PictureCandidate> {
    extract_og_image(document)
        .filter(|url| has_image_extension(url))
        .and_then(|url| absolute_url(&url))
        .map(|url| PictureCandidate::new(url, PictureQuality::High, "og:image"))
}

/// `twitter:image` candidate.
pub fn twitter_image_candidate(document: &Html) -> Option<PictureCandidate> {
    extract_twitter_image(document)
        .and_then(|url| absolute_url(&url))
        .map(|url| PictureCandidate::new(url, PictureQuality::High, "twitter:image"))
}

/// `<img>` tags whose attributes mention "profile" or "avatar".
pub fn img_tag_candidates(html: &str) -> Vec<PictureCandidate> {
    IMG_TAG_RE
        .find_iter(html)
        .map(|tag| tag.as_str())
        .filter(|tag| PROFILE_HINT_RE.is_match(tag))
        .filter_map(|tag| IMG_SRC_RE.captures(tag))
        .filter_map(|caps| caps.get(1).and_then(|m| absolute_url(m.as_str())))
        .map(|url| PictureCandidate::new(url, PictureQuality::Medium, "img"))
        .collect()
}

/// CSS `background-image: url(...)` declarations pointing at an image file.
pub fn css_background_candidates(html: &str) -> Vec<PictureCandidate> {
    CSS_BACKGROUND_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).and_then(|m| absolute_url(m.as_str())))
        .map(|url| PictureCandidate::new(url, PictureQuality::Medium, "css"))
        .collect()
}

/// `image` of the first JSON-LD block that has one.
pub fn json_ld_candidate(html: &str) -> Option<PictureCandidate> {
    json_ld_image(&extract_json_ld(html))
        .and_then(|url| absolute_url(&url))
        .map(|url| PictureCandidate::new(url, PictureQuality::High, "json-ld"))
}

/// Runs every picture rule over a page, in declaration order.
///
/// The snapcode fallback is not included; it does not depend on the page.
pub fn collect_picture_candidates(document: &Html, html: &str) -> Vec<PictureCandidate> {
    let mut candidates = Vec::new();
    candidates.extend(og_image_candidate(document));
    candidates.extend(twitter_image_candidate(document));
    candidates.extend(img_tag_candidates(html));
    candidates.extend(css_background_candidates(html));
    candidates.extend(json_ld_candidate(html));
    log::debug!(
        "Found {} picture candidates: {:?}",
        candidates.len(),
        candidates.iter().map(|c| c.source).collect::<Vec<_>>()
    );
    candidates
}

/// Keeps absolute http(s) URLs; protocol-relative URLs are upgraded to https.
///
/// Relative paths and `data:` URIs are dropped: there is no base URL to resolve
/// them against in the response.
fn absolute_url(raw: &str) -> Option<String> {
    let url = super::embedded::unescape_json_url(raw.trim());
    if url.starts_with("https://") || url.starts_with("http://") {
        Some(url)
    } else if let Some(rest) = url.strip_prefix("//") {
        Some(format!("https://{}", rest))
    } else {
        None
    }
}
