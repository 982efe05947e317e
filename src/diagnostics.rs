//! Stderr diagnostics. Stdout is reserved for the report itself.

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `warn` filter, e.g. `RUST_LOG=query_profile_tree=debug`.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    if let Err(err) = subscriber.finish().try_init() {
        debug!(%err, "tracing subscriber already installed");
    }
}
