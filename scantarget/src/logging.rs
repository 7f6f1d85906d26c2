//! Logging initialization for the scantarget binary.
//!
//! Uses `tracing` with `tracing-subscriber`. The default filter comes from
//! the fixed `log_level` setting; the `RUST_LOG` environment variable
//! overrides it. Diagnostics go to stderr so the demo's stdout contract
//! stays intact.

use scantarget_lib::config::AppConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging subsystem from the fixed configuration.
///
/// The debug-level events (the simulated query line, the credential-in-log
/// marker) only appear when the filter is raised, for example with
/// `RUST_LOG=scantarget_lib=debug`.
pub fn init_logging(config: &AppConfig) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = format!(
        "scantarget={level},scantarget_lib={level}",
        level = config.log_level
    );
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
