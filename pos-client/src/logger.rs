//! Logging Infrastructure
//!
//! Console logging for the POS client. `RUST_LOG` overrides the level passed
//! in, so a single terminal can be turned up to `debug` without a rebuild.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "pos_client=debug")
/// * `json_format` - JSON lines instead of the human-readable format
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// pos_client::logger::init_logger("debug", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}

/// Like [`init_logger`] with the level from `POS_LOG_LEVEL` (default `info`)
/// and JSON output when `POS_LOG_JSON` is `true`
pub fn init_from_env() -> anyhow::Result<()> {
    let level = std::env::var("POS_LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("POS_LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    init_logger(&level, json)
}
