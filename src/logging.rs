// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Logging setup using tracing.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

pub fn verbosity_to_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the filter from `RUST_LOG`-style directives, the verbosity level is used only when
/// the directives don't set anything.
pub fn build_filter(env_directives: Option<&str>, verbosity: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity_to_level(verbosity).into())
        .parse_lossy(env_directives.unwrap_or_default())
}

/// Initialize the global tracing subscriber.
///
/// `verbosity` is the number of `--verbose` flags, it's ignored when `RUST_LOG` is set.
pub fn init(verbosity: u8) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directives.as_deref(), verbosity);

    // a subscriber can already be installed when embedded into a host application
    let result = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    if let Err(err) = result {
        eprintln!("Can't initialize logging: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_maps_to_levels() {
        assert_eq!(verbosity_to_level(0), Level::WARN);
        assert_eq!(verbosity_to_level(1), Level::INFO);
        assert_eq!(verbosity_to_level(2), Level::DEBUG);
        assert_eq!(verbosity_to_level(3), Level::TRACE);
        assert_eq!(verbosity_to_level(10), Level::TRACE);
    }

    #[test]
    fn test_env_directives_are_not_overridden_by_verbosity() {
        let filter = build_filter(Some("debug"), 0).to_string();

        assert!(filter.contains("debug"));
        assert!(!filter.contains("warn"));
    }

    #[test]
    fn test_env_target_directives_are_kept() {
        let filter = build_filter(Some("rgb_picker=trace"), 0).to_string();

        assert!(filter.contains("rgb_picker=trace"));
    }

    #[test]
    fn test_verbosity_is_used_without_env_directives() {
        assert_eq!(build_filter(None, 0).to_string(), "warn");
        assert_eq!(build_filter(None, 2).to_string(), "debug");
        assert_eq!(build_filter(Some(""), 1).to_string(), "info");
    }
}
