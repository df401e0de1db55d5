//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `STOREFRONT`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use storefront::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod product;
mod server;

pub use error::{ConfigError, ValidationError};
pub use product::ProductServiceConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Product catalog client configuration
    #[serde(default)]
    pub product_service: ProductServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads environment variables with
    /// the `STOREFRONT` prefix:
    ///
    /// - `STOREFRONT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STOREFRONT__PRODUCT_SERVICE__BASE_URL=...` -> `product_service.base_url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STOREFRONT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// In production the catalog must be reached over HTTPS.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.product_service.validate()?;
        if self.server.is_production() && !self.product_service.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidProductServiceUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.product_service.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_production_requires_https_catalog() {
        let mut config = AppConfig::default();
        config.server.environment = Environment::Production;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProductServiceUrl)
        ));

        config.product_service.base_url = "https://catalog.example.com".to_string();
        assert!(config.validate().is_ok());
    }
}
