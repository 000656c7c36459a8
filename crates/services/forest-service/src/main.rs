//! Forest Service - gRPC facade and administration commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::ROLE_USUARIO;
use forest_service_lib::config::ForestServiceConfig;
use forest_service_lib::{BoxError, MigrateAction, NewAccount};

#[derive(Parser)]
#[command(name = "forest-service")]
#[command(about = "Forest catalog RPC facade")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        /// Defaults to FOREST_SERVICE_HOST
        #[arg(long)]
        host: Option<String>,
        /// Defaults to FOREST_SERVICE_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// User account commands
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
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
enum UserCommands {
    /// Create an account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// admin or usuario
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
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = ForestServiceConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            forest_service_lib::run_with_config(config).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            forest_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::User { action } => match action {
            UserCommands::Create {
                username,
                password,
                role,
                full_name,
                email,
            } => {
                let user = forest_service_lib::create_user(NewAccount {
                    username,
                    password,
                    role,
                    full_name,
                    email,
                })
                .await?;
                println!("Created user {} (id {}, role {})", user.username, user.id, user.role);
            }
        },
    }

    Ok(())
}
