mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "agency-site failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let leptos = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    tracing::info!(site_root = %leptos.leptos_options.site_root, "leptos options loaded");

    let app = routes::app(leptos.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "agency-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
