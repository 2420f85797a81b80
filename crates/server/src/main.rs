//! CupidSecure service entry point

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cupidsecure_config::{catalog, init_catalog, load_settings};
use cupidsecure_llm::{LlmConfig, OpenRouterBackend};
use cupidsecure_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let settings = load_settings(config_path.as_deref()).context("Failed to load settings")?;

    init_catalog(&settings.catalog_path).context("Failed to load pattern catalog")?;

    let backend = OpenRouterBackend::new(LlmConfig {
        model: settings.llm.model.clone(),
        endpoint: settings.llm.endpoint.clone(),
        api_key: settings.llm.api_key.clone(),
        timeout: Duration::from_secs(settings.llm.timeout_secs),
        ..LlmConfig::default()
    })
    .context("Failed to create OpenRouter backend")?;

    cupidsecure_server::metrics::init_metrics().context("Failed to install metrics recorder")?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState::new(settings, catalog(), Arc::new(backend));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, "CupidSecure server listening");

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
