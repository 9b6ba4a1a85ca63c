//! BDL command-line driver.
//!
//! The binary (`bdl`) is a thin argument parser over [`commands`]; the
//! commands themselves work on in-memory source so they can be tested
//! without touching the filesystem.

pub mod commands;
pub mod diagnostic;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bdl_lexer=trace`
/// or `RUST_LOG=bdl_parse=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
