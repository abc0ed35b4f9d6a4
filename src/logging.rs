//! Logging setup for the command line tool.
//!
//! Installs a global tracing subscriber that writes to stderr,
//! so that stdout carries only the tree and the accuracy report.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

static INSTALLED: OnceLock<()> = OnceLock::new();


/// Initialize tracing.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown,
/// or debug events too when `verbose` is set.
/// Subsequent calls are no-ops.
pub fn init(verbose: bool) {
    if INSTALLED.get().is_some() {
        return;
    }

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(build_env_filter(verbose))
        .with(stderr_layer);

    // Another subscriber may already be installed by the host program.
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("logging initialized");
    }
    let _ = INSTALLED.set(());
}


fn build_env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default))
}
