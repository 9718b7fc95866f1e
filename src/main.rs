use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imgor::{api::create_router, config::StorageBackend, ApplicationBuilder, Config};

/// Content-addressed image hosting server
#[derive(Debug, Parser)]
#[command(name = "imgor", version, about)]
struct Cli {
    /// Address to listen on (overrides LISTEN_ADDR)
    #[arg(long)]
    listen: Option<String>,

    /// Storage backend: local or s3 (overrides STORAGE_BACKEND)
    #[arg(long)]
    backend: Option<StorageBackend>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_FORMAT_JSON", default_value_t = false)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    info!("Starting imgor");

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(backend) = cli.backend {
        config.storage_backend = backend;
    }
    config.validate().context("Invalid configuration")?;
    info!(backend = %config.storage_backend, "Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();

    // Initialize storage and use cases
    let state = ApplicationBuilder::new(config)
        .with_storage()
        .await
        .context("Failed to initialize image store")?
        .build()?;

    let app = create_router(state);

    // Start server
    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
