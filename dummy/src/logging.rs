//! Opt-in tracing for hosts embedding this crate.
//!
//! The arithmetic functions never emit events. Lookup misses emit `trace`
//! events with the missed `key`, visible only once a subscriber enables them.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Build a subscriber that writes compact lines to `writer`.
///
/// Hosts that manage their own dispatch can pass the result to
/// `tracing::subscriber::with_default` instead of installing it globally.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).compact())
}

/// Install the global subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// Returns an error instead of panicking when the host already installed a
/// global subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=dummy=trace cargo test
/// ```
pub fn init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    subscriber(filter, std::io::stderr).try_init()
}
