mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "proxying /api to backend");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "verdant listening");
    axum::serve(listener, app).await?;
    Ok(())
}
