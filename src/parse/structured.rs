//! Structured data extraction.
//!
//! This module extracts JSON-LD blocks (`<script type="application/ld+json">`)
//! and reads the profile image out of them.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

// Matches both quote styles of the type attribute, case-insensitive
const JSON_LD_PATTERN: &str =
    r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;

static JSON_LD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(JSON_LD_PATTERN, "JSON_LD_RE"));

/// Extracts JSON-LD structured data from HTML.
///
/// Each script body is parsed as JSON; top-level arrays are flattened. Blocks that
/// fail to parse are skipped.
pub fn extract_json_ld(html: &str) -> Vec<Value> {
    let mut json_ld_scripts = Vec::new();

    for cap in JSON_LD_RE.captures_iter(html) {
        let Some(json_content) = cap.get(1) else {
            continue;
        };
        let json_str = json_content.as_str().trim();
        match serde_json::from_str::<Value>(json_str) {
            Ok(Value::Array(values)) => json_ld_scripts.extend(values),
            Ok(value) => json_ld_scripts.push(value),
            Err(e) => log::debug!("Skipping unparsable JSON-LD block: {}", e),
        }
    }

    json_ld_scripts
}

/// Returns the first `image` found in a list of JSON-LD values.
///
/// `image` may be a string, an `ImageObject` (`{"url": ...}` or
/// `{"contentUrl": ...}`) or an array of either. Objects nested under `@graph`
/// and `mainEntity` are searched too.
pub fn json_ld_image(values: &[Value]) -> Option<String> {
    values.iter().find_map(image_of)
}

fn image_of(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    if let Some(url) = object.get("image").and_then(image_url) {
        return Some(url);
    }
    if let Some(url) = object.get("mainEntity").and_then(image_of) {
        return Some(url);
    }
    object
        .get("@graph")
        .and_then(Value::as_array)
        .and_then(|graph| graph.iter().find_map(image_of))
}

fn image_url(image: &Value) -> Option<String> {
    match image {
        Value::String(url) if !url.trim().is_empty() => Some(url.trim().to_string()),
        Value::Object(object) => object
            .get("url")
            .or_else(|| object.get("contentUrl"))
            .and_then(image_url),
        Value::Array(items) => items.iter().find_map(image_url),
        _ => None,
    }
}
