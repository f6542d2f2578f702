//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Shared-secret authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_required_settings_with_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgresql://localhost/storefront",
            "--token",
            "s3cret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3030");
        assert_eq!(config.auth.token, "s3cret");
        assert!(!config.database.run_migrations);
        assert!(!config.observability.otel_enabled);

        Ok(())
    }

    #[test]
    fn telemetry_defaults_name_the_storefront() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgresql://localhost/storefront",
            "--token",
            "s3cret",
        ])?;

        // Both may be set in the environment of whoever runs the tests.
        if std::env::var_os("OTEL_SERVICE_NAME").is_none() {
            assert_eq!(config.observability.otel_service_name, "storefront-json");
        }

        if std::env::var_os("SLOW_REQUEST_THRESHOLD_MS").is_none() {
            assert_eq!(config.observability.slow_request_threshold_ms, 500);
        }

        Ok(())
    }

    #[test]
    fn missing_token_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgresql://localhost/storefront",
        ]);

        // TOKEN may be present in the environment of whoever runs the tests.
        if std::env::var_os("TOKEN").is_none() {
            assert!(result.is_err(), "expected a missing token to be rejected");
        }
    }
}
