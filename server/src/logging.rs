//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects what is logged. When it is unset or unparsable the
//! server logs at `info`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the filter from a raw `RUST_LOG` value.
pub(crate) fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global fmt subscriber.
pub fn init() {
    let raw = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(raw.as_deref()))
        .init();
}
