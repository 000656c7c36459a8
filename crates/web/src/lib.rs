//! Web surface library
//!
//! The browser-facing side of the forest catalogs: sessions, the
//! authorization gate and the role-gated CRUD pages. It links the forest
//! service library directly and renders views instead of calling the RPC
//! facade.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use redis::RedisError;
use tower_http::trace::TraceLayer;
use tracing::info;

use forest_service_lib::infra::Database;
use forest_service_lib::service::Services;

use crate::config::WebConfig;
use crate::middleware::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::routes::create_router;
use crate::state::AppState;
use crate::views::EmbeddedJsonRenderer;

/// Error type returned by the entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the web surface as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), BoxError> {
    let config = WebConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the web surface on the host and port from the configuration.
pub async fn run_with_config(config: WebConfig) -> Result<(), BoxError> {
    let host = config.host.clone();
    run_server_with_config(&host, config.port, config).await
}

/// Redis sessions when a URL is configured, in-process ones otherwise.
pub async fn connect_sessions(config: &WebConfig) -> Result<Arc<dyn SessionStore>, RedisError> {
    match &config.session_redis_url {
        Some(url) => Ok(Arc::new(RedisSessionStore::connect(url).await?)),
        None => {
            info!("SESSION_REDIS_URL not set, keeping sessions in memory");
            Ok(Arc::new(MemorySessionStore::new()))
        }
    }
}

/// Serve the router for the given state.
pub async fn serve(host: &str, port: u16, state: AppState) -> Result<(), BoxError> {
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Web surface listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_server_with_config(host: &str, port: u16, config: WebConfig) -> Result<(), BoxError> {
    let database = Database::connect(&config.database_url).await?;
    let services = Services::from_connection(database.get_connection());
    let sessions = connect_sessions(&config).await?;

    let state = AppState::new(services, sessions, Arc::new(EmbeddedJsonRenderer), config)
        .with_database(Arc::new(database));

    serve(host, port, state).await
}
