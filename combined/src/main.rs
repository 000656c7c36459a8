//! Combined binary - runs the web surface and the RPC facade in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::ROLE_USUARIO;
use forest_service_lib::config::DEFAULT_GRPC_PORT;
use forest_service_lib::{BoxError, NewAccount};

#[derive(Parser)]
#[command(name = "sistema-forestal")]
#[command(about = "Forest management system: web surface and RPC facade in one binary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web surface and the RPC facade
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8080")]
        web_port: u16,
        #[arg(long, default_value_t = DEFAULT_GRPC_PORT)]
        grpc_port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = ROLE_USUARIO)]
        role: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            web_port,
            grpc_port,
        } => {
            info!("Starting web surface and RPC facade");
            info!("  Web:        http://{}:{}", host, web_port);
            info!("  RPC facade: http://{}:{}", host, grpc_port);

            // The RPC facade applies the migrations before the web surface connects
            let grpc_host = host.clone();
            let grpc_handle = tokio::spawn(async move {
                if let Err(e) = forest_service_lib::run_embedded(&grpc_host, grpc_port).await {
                    error!("RPC facade failed: {}", e);
                }
            });

            tokio::time::sleep(std::time::Duration::from_millis(500)).await;

            let web_host = host.clone();
            let web_handle = tokio::spawn(async move {
                if let Err(e) = web_lib::run_embedded(&web_host, web_port).await {
                    error!("Web surface failed: {}", e);
                }
            });

            // Wait for either component to exit (which would indicate an error)
            tokio::select! {
                _ = grpc_handle => {
                    error!("RPC facade exited unexpectedly");
                }
                _ = web_handle => {
                    error!("Web surface exited unexpectedly");
                }
            }
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => forest_service_lib::MigrateAction::Up,
                MigrateAction::Down => forest_service_lib::MigrateAction::Down,
                MigrateAction::Status => forest_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => forest_service_lib::MigrateAction::Fresh,
            };
            forest_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::User {
            action:
                UserAction::Create {
                    username,
                    password,
                    role,
                    full_name,
                    email,
                },
        } => {
            let user = forest_service_lib::create_user(NewAccount {
                username,
                password,
                role,
                full_name,
                email,
            })
            .await?;
            println!("Created user {} ({}) with id {}", user.username, user.role, user.id);
        }
    }

    Ok(())
}
