//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CHECK_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_OWNER, DEFAULT_PORT, DEFAULT_PROFILE_URL_TEMPLATE,
    DEFAULT_STORY_URL_TEMPLATE, DEFAULT_SUBSCRIBER_LABELS, DEFAULT_USER_AGENT,
    DEFAULT_WEBSITE_LABELS, PROFILE_TIMEOUT_SECS, STORY_TIMEOUT_SECS,
};

/// Minimum level for this service's own log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-readable lines
    Plain,
    /// One JSON object per line (`ts`, `level`, `target`, `msg`)
    Json,
}

/// Service configuration.
///
/// Parsed once at startup from the command line (and environment), then shared
/// read-only by every request. It can also be constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use snap_profile::Config;
///
/// let config = Config {
///     port: 8080,
///     owner: "@me".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "snap_profile", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SNAP_PROFILE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, env = "SNAP_PROFILE_LOG_LEVEL", value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "SNAP_PROFILE_LOG_FORMAT", value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Attribution string included in every response
    #[arg(long, env = "SNAP_PROFILE_OWNER", default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// HTTP User-Agent header value for upstream requests
    #[arg(long, env = "SNAP_PROFILE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Profile page URL template (`{username}` is substituted)
    #[arg(long, default_value = DEFAULT_PROFILE_URL_TEMPLATE)]
    pub profile_url_template: String,

    /// Story page URL template (`{username}` is substituted)
    #[arg(long, default_value = DEFAULT_STORY_URL_TEMPLATE)]
    pub story_url_template: String,

    /// Profile page fetch timeout in seconds
    #[arg(long, default_value_t = PROFILE_TIMEOUT_SECS)]
    pub profile_timeout_secs: u64,

    /// Story page fetch timeout in seconds
    #[arg(long, default_value_t = STORY_TIMEOUT_SECS)]
    pub story_timeout_secs: u64,

    /// Existence check timeout in seconds
    #[arg(long, default_value_t = CHECK_TIMEOUT_SECS)]
    pub check_timeout_secs: u64,

    /// Word for "subscribers" in a description, tried in the given order
    #[arg(long = "subscriber-label", default_values_t = default_subscriber_labels())]
    pub subscriber_labels: Vec<String>,

    /// Platform name recognized as a `<label>: <token>` website hint
    #[arg(long = "website-label", default_values_t = default_website_labels())]
    pub website_labels: Vec<String>,
}

fn default_subscriber_labels() -> Vec<String> {
    DEFAULT_SUBSCRIBER_LABELS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_website_labels() -> Vec<String> {
    DEFAULT_WEBSITE_LABELS.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn profile_timeout(&self) -> Duration {
        Duration::from_secs(self.profile_timeout_secs)
    }

    pub fn story_timeout(&self) -> Duration {
        Duration::from_secs(self.story_timeout_secs)
    }

    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            owner: DEFAULT_OWNER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            profile_url_template: DEFAULT_PROFILE_URL_TEMPLATE.to_string(),
            story_url_template: DEFAULT_STORY_URL_TEMPLATE.to_string(),
            profile_timeout_secs: PROFILE_TIMEOUT_SECS,
            story_timeout_secs: STORY_TIMEOUT_SECS,
            check_timeout_secs: CHECK_TIMEOUT_SECS,
            subscriber_labels: default_subscriber_labels(),
            website_labels: default_website_labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        let pairs = [
            (LogLevel::Error, log::LevelFilter::Error),
            (LogLevel::Warn, log::LevelFilter::Warn),
            (LogLevel::Info, log::LevelFilter::Info),
            (LogLevel::Debug, log::LevelFilter::Debug),
            (LogLevel::Trace, log::LevelFilter::Trace),
        ];
        for (level, filter) in pairs {
            assert_eq!(log::LevelFilter::from(level), filter);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.profile_timeout_secs, 10);
        assert_eq!(config.story_timeout_secs, 8);
        assert_eq!(config.check_timeout_secs, 5);
        assert_eq!(config.owner, "@GoatThunder");
        assert_eq!(config.subscriber_labels, vec!["सब्सक्राइबर", "subscribers"]);
        assert_eq!(config.website_labels, vec!["instagram", "tiktok", "youtube"]);
    }

    #[test]
    fn test_cli_defaults_match_default_impl() {
        // Host and port are left out: PORT is commonly set in the environment
        let parsed = Config::try_parse_from(["snap_profile"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.profile_url_template, default.profile_url_template);
        assert_eq!(parsed.story_url_template, default.story_url_template);
        assert_eq!(parsed.subscriber_labels, default.subscriber_labels);
        assert_eq!(parsed.website_labels, default.website_labels);
    }

    #[test]
    fn test_cli_repeatable_labels() {
        let parsed = Config::try_parse_from([
            "snap_profile",
            "--website-label",
            "twitch",
            "--website-label",
            "twitter",
        ])
        .unwrap();
        assert_eq!(parsed.website_labels, vec!["twitch", "twitter"]);
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
