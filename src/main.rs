mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::error::SiteError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "teplo-site failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SiteError> {
    let config = config::SiteConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;

    tracing::info!(%addr, api_base_url = %config.api.base_url, "teplo-site listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
