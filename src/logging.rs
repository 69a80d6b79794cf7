//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so CSV and JSON on stdout stay machine-readable.
//! `RUST_LOG`, when set, takes precedence over the `-v` count.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the number of `-v` flags to a level.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `rust_log` (the `RUST_LOG` value) wins when it is set and parses;
/// otherwise this crate logs at `level` and dependencies at warn.
fn build_env_filter(rust_log: Option<&str>, level: Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            let level = level.as_str().to_lowercase();
            EnvFilter::new(format!("{}={level},warn", env!("CARGO_CRATE_NAME")))
        })
}

/// Install the global subscriber. Calling it twice is harmless; the
/// second call is ignored.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity);
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(rust_log.as_deref(), level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2)
                .compact(),
        )
        .try_init();
}
