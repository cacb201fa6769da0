//! Logger initialization.
//!
//! `env_logger` backend behind the `log` facade, with a colored plain format for
//! terminals and a one-object-per-line JSON format for log collectors.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Modules whose output is clamped regardless of the requested level.
const NOISY_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Initializes the process-wide logger.
///
/// `level` is the global default and always governs this crate. `RUST_LOG`
/// directives are honored for any other module, while the parser and HTTP stack
/// stay clamped.
///
/// # Arguments
///
/// * `level` - Minimum level for this service's own log lines
/// * `format` - `Plain` (colored) or `Json`
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=axum=debug snap_profile --log-level debug --port 8080
/// snap_profile --log-level debug --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = configure_builder(level, rust_log.as_deref());

    match format {
        LogFormat::Json => {
            builder.format(write_json);
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(write_plain);
        }
    }

    builder.try_init()?;
    Ok(())
}

/// Filter setup shared by initialization and tests.
///
/// Directives added later replace earlier ones for the same module, so the
/// order is: `RUST_LOG`, then the global level, then the clamps and this crate.
fn configure_builder(level: LevelFilter, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }
    builder.filter_level(level);
    for &(module, clamp) in NOISY_MODULES {
        builder.filter_module(module, clamp.min(level));
    }
    builder.filter_module("snap_profile", level);
    builder
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{}", line)
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let level = record.level();
    let (emoji, colored_level) = match level {
        Level::Error => ("❌", level.as_str().red()),
        Level::Warn => ("⚠️", level.as_str().yellow()),
        Level::Info => ("✔️", level.as_str().green()),
        Level::Debug => ("🔍", level.as_str().blue()),
        Level::Trace => ("🔬", level.as_str().purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noisy_modules_never_exceed_requested_level() {
        for &(_, clamp) in NOISY_MODULES {
            assert!(clamp <= LevelFilter::Info);
            assert_eq!(clamp.min(LevelFilter::Error), LevelFilter::Error);
        }
    }

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.matches(&Record::builder().target(target).level(level).build())
    }

    #[test]
    fn test_cli_level_governs_this_crate_over_rust_log() {
        let logger = configure_builder(LevelFilter::Info, Some("snap_profile=trace")).build();
        assert!(enabled(&logger, "snap_profile::api", Level::Info));
        assert!(!enabled(&logger, "snap_profile::api", Level::Debug));

        let logger = configure_builder(LevelFilter::Debug, Some("snap_profile=error")).build();
        assert!(enabled(&logger, "snap_profile::fetch", Level::Debug));
    }

    #[test]
    fn test_rust_log_directives_apply_to_other_modules() {
        let logger = configure_builder(LevelFilter::Info, Some("axum=debug,tower=warn")).build();
        assert!(enabled(&logger, "axum::serve", Level::Debug));
        assert!(!enabled(&logger, "tower::util", Level::Info));
        assert!(!enabled(&logger, "other_crate", Level::Debug));
    }

    #[test]
    fn test_noisy_modules_stay_clamped_under_rust_log() {
        let logger = configure_builder(LevelFilter::Trace, Some("html5ever=trace")).build();
        assert!(enabled(&logger, "html5ever::tree_builder", Level::Error));
        assert!(!enabled(&logger, "html5ever::tree_builder", Level::Warn));
        assert!(enabled(&logger, "reqwest::connect", Level::Info));
        assert!(!enabled(&logger, "reqwest::connect", Level::Debug));
    }

    #[test]
    fn test_second_initialization_is_an_error_not_a_panic() {
        // Only one logger per process: whichever call comes second must fail cleanly
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
