//! Diagnostic logging via `tracing`
//!
//! Events go to stderr. The filter comes from `FRAMECHART_LOG` (standard
//! `EnvFilter` syntax) and defaults to warnings from this crate only.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FRAMECHART_LOG";
const DEFAULT_FILTER: &str = "framechart=warn";

/// Install the global subscriber; returns `false` if one is already set
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!("tracing initialized");
    true
}
