//! Vehicles API server.
//!
//! Wires the aggregation service to its collaborators (explicit
//! construction, no container) and serves the REST boundary.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vehicles::api::rest::{create_router, AppState};
use vehicles::application::services::CarAggregationService;
use vehicles::config::Settings;
use vehicles::infrastructure::clients::{MapsServiceClient, PriceServiceClient};
use vehicles::infrastructure::persistence::in_memory::InMemoryCarRepository;
use vehicles::infrastructure::persistence::postgres::PostgresCarRepository;
use vehicles::infrastructure::persistence::CarRepository;

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

    let repository: Arc<dyn CarRepository> = match &settings.database.url {
        Some(url) => {
            let repo = PostgresCarRepository::connect(url, settings.database.max_connections)
                .await
                .context("failed to connect to database")?;
            tracing::info!("using PostgreSQL car repository");
            Arc::new(repo)
        }
        None => {
            tracing::info!("no database configured, using in-memory car repository");
            Arc::new(InMemoryCarRepository::new())
        }
    };

    let timeout_ms = settings.enrichment.lookup_timeout_ms;
    let prices = Arc::new(
        PriceServiceClient::new(settings.pricing.base_url.as_str(), timeout_ms)
            .context("failed to create pricing client")?,
    );
    let maps = Arc::new(
        MapsServiceClient::new(settings.maps.base_url.as_str(), timeout_ms)
            .context("failed to create maps client")?,
    );

    let service =
        CarAggregationService::new(repository, prices, maps, settings.enrichment.to_config());
    let app = create_router(AppState::new(service));

    let addr = settings.server_addr();
    tracing::info!(%addr, "vehicles API listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
