//! Tracing subscriber set-up for the `music-tag` binary
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary (or to whichever application embeds the crate).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "music_tag=warn";
const VERBOSE_LOG_FILTER: &str = "music_tag=debug";

/// Choose the filter directive: `RUST_LOG` wins, then `--verbose`, then the default
#[must_use]
pub fn filter_directive(verbose: bool) -> String {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => VERBOSE_LOG_FILTER.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install a stderr subscriber; a second call is a no-op
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
