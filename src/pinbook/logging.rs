//! Diagnostic logging.
//!
//! Library code only emits `tracing` events. The binary installs a subscriber
//! writing to stderr, so logs never mix with listing output on stdout.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors, e.g. unreadable data found on load.
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    /// Maps the count of `-v` flags to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// `--quiet` wins over any number of `-v`.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::from_occurrences(verbose)
        }
    }

    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `verbosity`.
/// Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("pinbook={}", verbosity.to_level_filter());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time(),
    );

    let _ = subscriber.try_init();
}
