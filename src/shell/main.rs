use tracing_subscriber::{EnvFilter, fmt};

use posts_api::shell::config::Config;
use posts_api::shell::http::{cors_layer, router};
use posts_api::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "posts_api=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let app = router(
        AppState::in_memory(),
        cors_layer(config.allowed_origins.clone()),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
