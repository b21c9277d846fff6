//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Log lines go to stderr so command output on stdout stays clean.
//!
//! # Log Levels
//!
//! - `warn`: dangling references, vocabulary drift (default)
//! - `info`: command progress
//! - `debug`: catalog load and filter summaries
//! - `trace`: everything else

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the `-v` count to a level
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8, with_ansi: bool) -> anyhow::Result<()> {
    let default_level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(with_ansi)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
