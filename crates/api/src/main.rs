use anyhow::Context;

use customers_api::app::{self, services};
use customers_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    customers_observability::init();

    let config = AppConfig::from_env().context("failed to read configuration")?;

    let services = services::build_services(&config)
        .await
        .context("failed to connect to the customer store")?;

    services::log_all_customers(&services).await;

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
