use anyhow::Context;

use smartstock_infra::AppConfig;
use smartstock_observability::LogFormat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    smartstock_observability::init(LogFormat::from_env());

    let config = AppConfig::from_env();
    let services = smartstock_api::app::services::build_services(&config)
        .context("failed to wire services")?;
    let app = smartstock_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        alert_source = %config.dashboard.alert_source,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
