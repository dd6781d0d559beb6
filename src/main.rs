//! not&notion command-line client
//!
//! Main entry point that loads configuration, wires the store, session and
//! services together and runs one command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use notnotion_auth::SessionManager;
use notnotion_cli::{AppState, Cli, output};
use notnotion_core::config::AppConfig;
use notnotion_core::error::AppError;
use notnotion_store::{MemoryDocumentStore, snapshot};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(cli, config).await {
        tracing::error!(error = %e, "Command failed");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = std::env::var("NOTNOTION_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = AppConfig::load(&cli.config, &env)?;
    if let Some(user) = &cli.user {
        config.auth.user_id = Some(user.clone());
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the state, run the command, persist the snapshot
async fn run(cli: Cli, config: AppConfig) -> Result<(), AppError> {
    tracing::debug!("Starting not&notion v{}", env!("CARGO_PKG_VERSION"));

    let store = MemoryDocumentStore::from_config(&config.store);
    if let Some(path) = &config.store.snapshot_path {
        snapshot::load(&store, path).await?;
    }

    let session = SessionManager::from_config(&config.auth)?;
    let snapshot_path = config.store.snapshot_path.clone();
    let state = AppState::new(config, store, session);

    let result = cli.execute(&state).await;

    if let Some(path) = snapshot_path {
        snapshot::save(&state.store, &path).await?;
    }

    result
}
