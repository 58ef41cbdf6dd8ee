//! Maps service.
//!
//! Serves descriptive addresses for approximate coordinate pairs from a
//! fixed dataset.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vehicles::config::Settings;
use vehicles::maps::{self, AddressBook};

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

    let app = maps::create_router(Arc::new(AddressBook::new()));
    let addr = format!("{}:{}", settings.server.host, settings.maps.port);
    tracing::info!(%addr, "maps service listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
