//! Helpers shared by the CLI binaries.

use std::path::PathBuf;

use anyhow::bail;
use neo_impact_calculator::catalog::Catalog;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load feed files, or the built-in sample when none are given.
pub fn load_catalog(feeds: &[PathBuf]) -> anyhow::Result<Catalog> {
    if feeds.is_empty() {
        return Ok(Catalog::builtin().clone());
    }
    let catalog = Catalog::load_feeds(feeds);
    if catalog.is_empty() {
        let listed: Vec<String> = feeds.iter().map(|p| p.display().to_string()).collect();
        bail!("could not load any asteroid data from {}", listed.join(", "));
    }
    tracing::info!(records = catalog.len(), "catalog loaded");
    Ok(catalog)
}
