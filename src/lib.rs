pub mod advisor;
pub mod comparison;
pub mod config;
pub mod error;
pub mod floorplan;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod pricing;
pub mod server;
pub mod signals;
pub mod state;
pub mod store;
pub mod style_test;
pub mod uploads;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `default_level`. `format` is "json" or "text".
/// This function can only be called once per process.
pub fn init_tracing(default_level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
