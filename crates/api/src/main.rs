use anyhow::Context;

use jetstream_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jetstream_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = jetstream_api::app::build_app(&config).context("failed to load seed fixtures")?;

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;

    let auth = if config.require_auth { "enabled" } else { "disabled" };
    tracing::info!(
        addr = %listener.local_addr()?,
        auth,
        static_dir = ?config.static_dir,
        "mock Jetstream API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
