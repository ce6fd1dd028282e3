use std::sync::Arc;

use anyhow::Context;
use boxoffice_api::{app, AppState};
use boxoffice_store::{load_catalog, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "boxoffice_api=debug,boxoffice_catalog=debug,boxoffice_store=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let store = load_catalog(&config.catalog.path)
        .await
        .with_context(|| format!("Failed to load catalog from {}", config.catalog.path))?;

    let app = app(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!("Failed to bind {}:{}", config.server.host, config.server.port)
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
