//! Fields recovered from the free-text profile description.
//!
//! Subscriber count and website hints depend on configurable label tables, so
//! their patterns are compiled once into a `DescriptionRules` value at startup.
//! Location rules are fixed.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

// 📍 followed by free text up to a line break or a separator glyph
const LOCATION_PIN_PATTERN: &str = r"📍\s*([^\n\r|•·]+)";
// "from New York", "from mumbai", "from मुंबई"; starts with a letter in any script,
// runs up to a line break, separator glyph or sentence punctuation
const LOCATION_FROM_PATTERN: &str = r"(?i)\bfrom\s+(\p{L}[^\n\r|•·,.!?;]*)";

static LOCATION_PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LOCATION_PIN_PATTERN, "LOCATION_PIN_RE"));
static LOCATION_FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LOCATION_FROM_PATTERN, "LOCATION_FROM_RE"));

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '(', '"', '\''];

/// Compiled description rules for one set of label tables.
#[derive(Debug, Clone)]
pub struct DescriptionRules {
    /// One pattern per subscriber label, in lookup order
    subscriber_patterns: Vec<Regex>,
    /// Alternation of all website labels; `None` when the table is empty
    website_pattern: Option<Regex>,
}

impl DescriptionRules {
    /// Compiles the rules for the given label tables.
    ///
    /// Labels are matched literally and case-insensitively.
    pub fn new<S: AsRef<str>>(
        subscriber_labels: &[S],
        website_labels: &[S],
    ) -> Result<Self, regex::Error> {
        let subscriber_patterns = subscriber_labels
            .iter()
            .map(|label| {
                Regex::new(&format!(
                    r"(?i)(\d+(?:[.,]\d+)?[kmb]?)\s*{}",
                    regex::escape(label.as_ref())
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let website_pattern = if website_labels.is_empty() {
            None
        } else {
            let alternation = website_labels
                .iter()
                .map(|label| regex::escape(label.as_ref()))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(
                r"(?i)\b(?:{})\s*:\s*(\S+)",
                alternation
            ))?)
        };

        Ok(Self {
            subscriber_patterns,
            website_pattern,
        })
    }

    /// Subscriber count such as `4.2k`, from the first label that matches.
    pub fn subscriber_count(&self, description: &str) -> Option<String> {
        self.subscriber_patterns.iter().find_map(|re| {
            re.captures(description)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }

    /// Token following the first `<label>:` website hint.
    pub fn website(&self, description: &str) -> Option<String> {
        let re = self.website_pattern.as_ref()?;
        re.captures(description)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION).to_string())
            .filter(|token| !token.is_empty())
    }
}

/// Location from a 📍 marker, else from a "from <Place>" phrase.
pub fn extract_location(description: &str) -> Option<String> {
    [&*LOCATION_PIN_RE, &*LOCATION_FROM_RE]
        .into_iter()
        .find_map(|re| {
            re.captures(description)
                .and_then(|caps| caps.get(1))
                .map(|m| {
                    m.as_str()
                        .trim()
                        .trim_end_matches(TRAILING_PUNCTUATION)
                        .trim()
                        .to_string()
                })
                .filter(|place| !place.is_empty())
        })
}
