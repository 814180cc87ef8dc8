//! Diagnostic logging for action runs.
//!
//! Stdout is reserved for workflow commands, so every log line goes to
//! stderr where the runner shows it in the step log.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the log filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global stderr subscriber.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging() {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false);

    let _ignored = tracing_subscriber::registry()
        .with(log_filter())
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{init_logging, log_filter};

    #[rstest]
    fn falls_back_to_info_filter() {
        let _guard = env_lock::lock_env([("RUST_LOG", None::<&str>)]);
        assert_eq!(log_filter().to_string(), "info");
    }

    #[rstest]
    fn honours_rust_log() {
        let _guard = env_lock::lock_env([("RUST_LOG", Some("debug"))]);
        assert_eq!(log_filter().to_string(), "debug");
    }

    #[rstest]
    fn repeated_initialisation_is_harmless() {
        init_logging();
        init_logging();
    }
}
