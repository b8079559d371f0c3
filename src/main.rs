use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_store::{config::Config, database::DatabaseManager, web::WebServer};

#[derive(Parser)]
#[command(name = "catalog-store")]
#[command(version)]
#[command(about = "Content catalog and site settings store for a media streaming admin backend")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Database file path (overrides config file)
    #[arg(short = 'd', long, value_name = "PATH")]
    database_path: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.log_level == "trace" {
        format!("catalog_store={},tower_http=trace", cli.log_level)
    } else {
        format!("catalog_store={},tower_http=info", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting catalog store v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config.display());

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(database_path) = cli.database_path {
        config.database.path = database_path;
    }

    info!("Using database: {}", config.database.path.display());

    let database = DatabaseManager::new(&config);
    database.initialize().await?;
    info!("Database schema applied and seed data in place");

    let web_server = WebServer::new(&config, database.clone())?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    let served = web_server.serve(shutdown_signal()).await;

    database.close().await;
    served
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let terminate = async {
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("Received SIGINT (Ctrl+C), shutting down gracefully"),
            _ = terminate => info!("Received SIGTERM, shutting down gracefully"),
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down gracefully");
        }
    }
}
