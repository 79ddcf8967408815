//! Widget host: serves the server-rendered chat widget and forwards `/api`
//! calls to the assistant backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this process. Page requests are rendered
//! by Leptos, static assets come from the site `pkg` directory, and every
//! `/api/*` request is relayed to `BACKEND_URL` unchanged.
#![recursion_limit = "256"]

mod config;
mod error;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;
use crate::proxy::Proxy;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = HostConfig::from_env()?;
    let proxy = Proxy::new(&config)?;
    tracing::info!(backend = %config.backend_url, "forwarding /api to backend");

    let app = routes::app(proxy)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "shopchat listening");
    axum::serve(listener, app).await?;
    Ok(())
}
