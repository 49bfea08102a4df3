//! Diagnostic logging
//!
//! `tracing` events go to stderr. The filter comes from `STACKPILOT_LOG` when
//! set, otherwise from the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_VAR;

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter from an explicit directive, falling back to the verbosity level
pub fn build_filter(directive: Option<&str>, verbose: u8) -> EnvFilter {
    let fallback = || EnvFilter::new(format!("stackpilot={}", level_for_verbosity(verbose)));
    match directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid {} value '{}': {}", LOG_VAR, directive, e);
            fallback()
        }),
        None => fallback(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, color: bool) {
    let directive = std::env::var(LOG_VAR).ok();
    let filter = build_filter(directive.as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(verbose >= 2)
        .without_time()
        .try_init();
}
