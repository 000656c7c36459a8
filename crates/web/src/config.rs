//! Web surface configuration.

use std::env;
use std::path::PathBuf;

use common::{port_from_env, DatabaseConfig};

/// Web surface configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub database_url: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Redis URL of the session store; sessions stay in process when unset
    pub session_redis_url: Option<String>,
    /// Directory holding the `css`, `js` and `images` folders
    pub assets_dir: PathBuf,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database_url: DatabaseConfig::from_env("WEB").url,
            host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: port_from_env("WEB_PORT", 8080),
            session_redis_url: env::var("SESSION_REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            assets_dir: env::var("WEB_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            database_url: DatabaseConfig::default().url,
            host: "0.0.0.0".to_string(),
            port: 8080,
            session_redis_url: None,
            assets_dir: PathBuf::from("static"),
            cookie_secure: false,
        }
    }
}
