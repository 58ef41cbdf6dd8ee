//! # Configuration
//!
//! Environment-driven settings for the platform binaries.
//!
//! Every value has an explicit default matching the platform's standard
//! ports (vehicles API 8080, pricing 8082, maps 9191). Overrides come from
//! the environment with the `VEHICLES` prefix and `__` separator, e.g.
//! `VEHICLES__SERVER__PORT=9000` or
//! `VEHICLES__DATABASE__URL=postgres://...`.

use crate::application::services::EnrichmentConfig;
use serde::Deserialize;

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Vehicles API server settings.
    pub server: ServerSettings,
    /// Pricing service settings.
    pub pricing: PricingSettings,
    /// Maps service settings.
    pub maps: MapsSettings,
    /// Enrichment tuning.
    pub enrichment: EnrichmentSettings,
    /// Database settings.
    pub database: DatabaseSettings,
}

/// Bind address for the vehicles API.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Pricing service location.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    /// Base URL the vehicles API calls.
    pub base_url: String,
    /// Port the pricing service binary binds.
    pub port: u16,
}

/// Maps service location.
#[derive(Debug, Clone, Deserialize)]
pub struct MapsSettings {
    /// Base URL the vehicles API calls.
    pub base_url: String,
    /// Port the maps service binary binds.
    pub port: u16,
}

/// Enrichment tuning knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentSettings {
    /// Per-lookup timeout in milliseconds.
    pub lookup_timeout_ms: u64,
    /// Concurrency limit for list enrichment.
    pub list_concurrency: usize,
}

impl EnrichmentSettings {
    /// Converts the settings into the service configuration.
    #[must_use]
    pub fn to_config(&self) -> EnrichmentConfig {
        EnrichmentConfig::with_timeout(self.lookup_timeout_ms)
            .with_list_concurrency(self.list_concurrency)
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection URL. When absent, the in-memory repository is used.
    #[serde(default)]
    pub url: Option<String>,
    /// Connection pool size.
    pub max_connections: u32,
}

impl Settings {
    /// Loads settings from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if an override cannot be parsed
    /// into the target type.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("pricing.base_url", "http://localhost:8082")?
            .set_default("pricing.port", 8082_i64)?
            .set_default("maps.base_url", "http://localhost:9191")?
            .set_default("maps.port", 9191_i64)?
            .set_default("enrichment.lookup_timeout_ms", 2000_i64)?
            .set_default("enrichment.list_concurrency", 8_i64)?
            .set_default("database.max_connections", 10_i64)?
            .add_source(::config::Environment::with_prefix("VEHICLES").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Returns the vehicles API bind address.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.pricing.port, 8082);
        assert_eq!(settings.maps.port, 9191);
        assert_eq!(settings.enrichment.lookup_timeout_ms, 2000);
        assert_eq!(settings.enrichment.list_concurrency, 8);
        assert!(settings.pricing.base_url.starts_with("http://"));
    }

    #[test]
    fn enrichment_settings_convert_to_config() {
        let settings = EnrichmentSettings {
            lookup_timeout_ms: 500,
            list_concurrency: 3,
        };
        let config = settings.to_config();
        assert_eq!(config.lookup_timeout_ms, 500);
        assert_eq!(config.list_concurrency, 3);
    }
}
