//! Shelf navigation kernel
//!
//! Serves the sidebar over HTTP, or prints it for a given user.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shelf_kernel::cli::{Cli, Command, menu_model};
use shelf_kernel::{AppState, Config};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state =
                AppState::new(&config).context("failed to initialize application state")?;
            serve(state).await
        }
        Command::Menu(args) => {
            let model = menu_model(&config, &args)?;
            let json =
                serde_json::to_string_pretty(&model).context("failed to serialize navigation")?;
            println!("{json}");
            Ok(())
        }
    }
}

async fn serve(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config().port));
    info!(%addr, "Starting Shelf navigation kernel");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;
    info!(%addr, "Server listening");

    axum::serve(listener, shelf_kernel::app(state))
        .await
        .context("server error")?;

    Ok(())
}

/// Logs go to stderr so `shelf menu` output stays pipeable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
