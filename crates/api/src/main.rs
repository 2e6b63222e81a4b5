use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster_observability::init();

    let config = roster_api::config::Config::from_env()?;
    let store = roster_api::bootstrap::connect_store(&config).await?;
    let app = roster_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{}", config.port))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(roster_api::bootstrap::shutdown_signal())
        .await?;

    Ok(())
}
