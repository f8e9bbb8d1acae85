//! Diagnostic output for the CLI binary
//!
//! The library only emits `tracing` events; this installs the subscriber
//! that prints them to stderr. `RUST_LOG` takes precedence over `--debug`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset: conversion progress at info,
/// per-line detail only with `--debug`
fn default_directive(debug: bool) -> &'static str {
    if debug {
        "telemetry_csv=debug"
    } else {
        "telemetry_csv=info"
    }
}

pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
