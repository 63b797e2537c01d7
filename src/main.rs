#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod config;
mod routes;

use config::{ConfigError, HostConfig};
use tracing_subscriber::EnvFilter;

/// Log filter when `RUST_LOG` is unset or blank.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Missing .env is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "recipe-notes host stopped");
        std::process::exit(1);
    }
}

/// `RUST_LOG` directives, falling back to [`DEFAULT_LOG_FILTER`] when they
/// are missing, blank or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let addr = config.site_addr;

    let app = routes::app(config.leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "recipe-notes listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
