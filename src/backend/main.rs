/**
 * Jobtrack Server Entry Point
 *
 * This is the main entry point for the jobtrack backend server.
 * It loads configuration, opens the database, and serves the API.
 */

use tracing_subscriber::EnvFilter;

use jobtrack::backend::server::create_app;
use jobtrack::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobtrack=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;

    tracing::info!("Server initialization started");

    let app = create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
