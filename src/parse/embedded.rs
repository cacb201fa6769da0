//! Extraction of values embedded in inline scripts and markup.
//!
//! Profile pages ship their state as JSON inside `<script>` tags. The shape of that
//! JSON is not stable, so values are recovered by key-shaped patterns rather than
//! by deserializing it. Every rule list is tried in order; the first match wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

// Bitmoji: CDN URL shapes first, then a JSON key named for bitmoji
const BITMOJI_PATTERNS: &[&str] = &[
    r#"https?://(?:sdk|images|render)\.bitmoji\.com/[^\s"'<>\\)]+"#,
    r#"https?://[a-z0-9.-]*sc-cdn\.net/[^\s"'<>\\)]*bitmoji[^\s"'<>\\)]*"#,
    r#"(?i)"bitmoji[a-z0-9_]*"\s*:\s*"([^"]+)""#,
];

// Quoted key first, then bare key (`snapScore: 123`)
const SNAP_SCORE_PATTERNS: &[&str] = &[
    r#"(?i)"snap_?score"\s*:\s*"?(\d+)"#,
    r#"(?i)\bsnap_?score\s*[:=]\s*"?(\d+)"#,
];

const FRIEND_COUNT_PATTERNS: &[&str] = &[
    r#"(?i)"friends?_?count"\s*:\s*"?(\d+)"#,
    r#"(?i)\bfriends?_?count\s*[:=]\s*"?(\d+)"#,
];

fn compile_all(patterns: &[&str], context: &str) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| compile_regex_unsafe(pattern, context))
        .collect()
}

static BITMOJI_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(BITMOJI_PATTERNS, "BITMOJI_RES"));
static SNAP_SCORE_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(SNAP_SCORE_PATTERNS, "SNAP_SCORE_RES"));
static FRIEND_COUNT_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(FRIEND_COUNT_PATTERNS, "FRIEND_COUNT_RES"));

/// Undoes the escaping JSON serializers apply to URLs (`\/`, `\u002F`, `\u0026`).
pub fn unescape_json_url(raw: &str) -> String {
    raw.replace("\\/", "/")
        .replace("\\u002F", "/")
        .replace("\\u002f", "/")
        .replace("\\u0026", "&")
        .replace("&amp;", "&")
}

/// First Bitmoji avatar URL found in the page.
pub fn extract_bitmoji_url(html: &str) -> Option<String> {
    BITMOJI_RES.iter().find_map(|re| {
        re.captures_iter(html).find_map(|caps| {
            // URL-shape patterns have no group; the JSON-key pattern captures the value
            let raw = caps.get(1).or_else(|| caps.get(0))?;
            let url = unescape_json_url(raw.as_str());
            url.starts_with("http").then_some(url)
        })
    })
}

/// Snap score from the first matching key pattern.
pub fn extract_snap_score(html: &str) -> Option<u64> {
    first_number(&SNAP_SCORE_RES, html)
}

/// Friend count from the first matching key pattern.
pub fn extract_friend_count(html: &str) -> Option<u64> {
    first_number(&FRIEND_COUNT_RES, html)
}

/// Verification flag.
///
/// True when "verified" appears anywhere in the page (any case). Flag literals
/// such as `"isVerified": true` contain the word and are covered by the same test.
pub fn is_verified(html: &str) -> bool {
    html.to_lowercase().contains("verified")
}

fn first_number(patterns: &[Regex], html: &str) -> Option<u64> {
    patterns.iter().find_map(|re| {
        re.captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| m.as_str().parse::<u64>().ok())
    })
}
