//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it only errors are shown, or
/// everything down to debug when `verbose` is set. Logs go to stderr.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span covering the handling of one join notification.
    pub fn join_event(nick: &str, channel: &str) -> Span {
        info_span!("join", nick = %nick, channel = %channel)
    }
}
