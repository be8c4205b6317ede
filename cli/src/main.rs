//! Scalars CLI - prints one value of each Rust primitive scalar type.
//!
//! ```text
//! main() -> init_tracing() -> Showcase::standard() -> report::write_showcase(stdout)
//! ```
//!
//! Stdout carries only the showcase block. Diagnostics go to stderr and are
//! silent unless `RUST_LOG` enables them.

mod report;

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use scalars_types::Showcase;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let showcase = Showcase::standard().context("failed to build showcase")?;
    tracing::debug!(
        sections = showcase.sections().len(),
        entries = showcase.entries().count(),
        "Showcase built"
    );

    let mut out = io::stdout().lock();
    report::write_showcase(&mut out, &showcase)
}
