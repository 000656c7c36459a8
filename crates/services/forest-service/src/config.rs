//! Forest service configuration.

use std::env;

use common::config::{port_from_env, DatabaseConfig};

/// Default port of the RPC facade.
pub const DEFAULT_GRPC_PORT: u16 = 50051;

/// Forest service configuration.
#[derive(Debug, Clone)]
pub struct ForestServiceConfig {
    /// Database connection URL
    pub database_url: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ForestServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database_url: DatabaseConfig::from_env("FOREST_SERVICE").url,
            host: env::var("FOREST_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: port_from_env("FOREST_SERVICE_PORT", DEFAULT_GRPC_PORT),
        }
    }
}

impl Default for ForestServiceConfig {
    fn default() -> Self {
        Self {
            database_url: DatabaseConfig::default().url,
            host: "0.0.0.0".to_string(),
            port: DEFAULT_GRPC_PORT,
        }
    }
}
