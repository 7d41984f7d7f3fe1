/// Tonearm Server - voice-driven playback session over HTTP
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tonearm_catalog::HttpCatalogClient;
use tonearm_server::{config::ServerConfig, create_router, state::AppState};
use tonearm_session::SessionController;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tonearm-server")]
#[command(about = "Tonearm voice playback session server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "TONEARM_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load and validate the configuration, then exit
    CheckConfig {
        /// Configuration file path
        #[arg(short, long, env = "TONEARM_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::CheckConfig { config } => {
            check_config(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Tonearm Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Catalog client logs in lazily on first lookup
    let catalog = HttpCatalogClient::new(config.catalog.clone())?;
    tracing::info!("Catalog client configured for {}", catalog.url());

    let session_config = config.session.session_config();
    tracing::info!(
        stop_policy = ?session_config.stop_policy,
        failure_policy = ?session_config.failure_policy,
        quality = session_config.quality.as_str(),
        "Session policies"
    );

    let controller = SessionController::new(Arc::new(catalog), session_config);
    let app_state = AppState::new(controller, config.session.application_ids.clone());

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn check_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    println!("Configuration OK");
    println!("  Listen:  {}:{}", config.server.host, config.server.port);
    println!("  Catalog: {}", config.catalog.url);
    if config.session.application_ids.is_empty() {
        println!("  Applications: any");
    } else {
        println!("  Applications: {}", config.session.application_ids.join(", "));
    }

    Ok(())
}
