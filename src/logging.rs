//! Tracing setup for the `dirview` binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Honours `RUST_LOG`; without it only warnings and errors are printed so
/// listings stay clean. Diagnostics go to stderr, never into the listing.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
