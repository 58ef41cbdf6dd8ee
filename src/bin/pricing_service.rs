//! Pricing service.
//!
//! Serves the read-only price catalog, seeded at startup the way the
//! platform has always done it: randomized USD prices for a fixed range of
//! vehicle ids.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vehicles::config::Settings;
use vehicles::pricing::{self, PriceCatalog, DEFAULT_CATALOG_SIZE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load settings")?;

    let catalog = Arc::new(PriceCatalog::seeded(DEFAULT_CATALOG_SIZE));
    tracing::info!(vehicles = catalog.len(), "price catalog seeded");

    let app = pricing::create_router(catalog);
    let addr = format!("{}:{}", settings.server.host, settings.pricing.port);
    tracing::info!(%addr, "pricing service listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
