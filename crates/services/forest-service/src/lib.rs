//! Forest Service Library
//!
//! Persistence, business rules and the gRPC facade of the forest catalogs.
//! It can be run as a standalone service or embedded in the combined binary,
//! and the web surface links it directly for the services.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;

use tonic::transport::Server;
use tracing::info;

use domain::User;

use crate::config::ForestServiceConfig;
use crate::grpc::{ReportGrpcService, SpeciesGrpcService, ZonesGrpcService};
use crate::infra::Database;
use crate::service::Services;

/// Error type returned by the entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the RPC facade as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), BoxError> {
    let config = ForestServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the RPC facade on the host and port from the configuration.
pub async fn run_with_config(config: ForestServiceConfig) -> Result<(), BoxError> {
    let host = config.host.clone();
    run_server_with_config(&host, config.port, config).await
}

/// Serve the three facade services on one address.
pub async fn serve(host: &str, port: u16, services: Services) -> Result<(), BoxError> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Forest RPC facade listening on {}", addr);

    let zones = ZonesGrpcService::new(services.zones());
    let species = SpeciesGrpcService::new(services.species(), services.zones(), services.states());
    let reports = ReportGrpcService::new(services.reports());

    Server::builder()
        .add_service(proto::CrudZonesServer::new(zones))
        .add_service(proto::CrudSpeciesServer::new(species))
        .add_service(proto::SpeciesReportServer::new(reports))
        .serve(addr)
        .await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), BoxError> {
    let config = ForestServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Account to provision from the command line.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Create a user account (for CLI commands).
pub async fn create_user(account: NewAccount) -> Result<User, BoxError> {
    let config = ForestServiceConfig::from_env();
    let db = Database::connect(&config.database_url).await?;
    let services = Services::from_connection(db.get_connection());

    let user = User {
        username: account.username,
        role: account.role,
        full_name: account.full_name,
        email: account.email,
        ..User::default()
    };
    let created = services.users().register(user, &account.password).await?;
    info!(user_id = created.id, username = %created.username, "Account created");

    Ok(created)
}

async fn run_server_with_config(
    host: &str,
    port: u16,
    config: ForestServiceConfig,
) -> Result<(), BoxError> {
    let db = Database::connect(&config.database_url).await?;
    let services = Services::from_connection(db.get_connection());

    serve(host, port, services).await
}
