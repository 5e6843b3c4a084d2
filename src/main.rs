use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use film_recs_api::{
    config::Config,
    db::{create_pool, SqliteFilmStore},
    routes::{create_router, AppState},
    services::providers::ReviewsApiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    let pool = create_pool(&config.db_path).await?;
    tracing::info!(db_path = %config.db_path, "Connected to film database");

    let reviews = ReviewsApiClient::new(config.reviews_api_url.clone(), config.reviews_timeout())?;

    let state = AppState::new(Arc::new(SqliteFilmStore::new(pool)), Arc::new(reviews));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        environment = %config.app_env,
        "App listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
