use anyhow::Result;
use axum::Router;
use cafeteria::CafeteriaModule;
use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

mod config;
mod logging;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "cafeteria-server", version, about = "Cafeteria menu HTTP service")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    logging::init(&config.logging)?;
    info!("Starting cafeteria server");

    // Initialize database pool
    let mut options = ConnectOptions::new(config.database.url.clone());
    options.max_connections(config.database.max_connections);
    let db = Arc::new(Database::connect(options).await?);
    info!("Database connection established");

    let module = CafeteriaModule::default();
    module.init(config.cafeteria.clone(), db).await?;

    let app = module.register_rest(Router::new())?.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<IpAddr>()?,
        config.server.port,
    ));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
