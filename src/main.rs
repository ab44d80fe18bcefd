use std::sync::Arc;

use anyhow::Context;
use movies::{
    AppState,
    config::Config,
    db,
    repository::{InMemoryMovieRepository, MovieRepository, SeaOrmMovieRepository},
    routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movies=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let movies: Arc<dyn MovieRepository> = if config.uses_memory_store() {
        tracing::warn!("using in-memory movie store; data is lost on restart");
        Arc::new(InMemoryMovieRepository::new())
    } else {
        let conn = db::connect_and_migrate(&config.database_url)
            .await
            .with_context(|| format!("connecting to {}", config.database_url))?;
        Arc::new(SeaOrmMovieRepository::new(conn))
    };

    if config.seed_demo_data {
        db::seed_if_empty(movies.as_ref()).await.context("seeding demo data")?;
    }

    let app = routes::router(Arc::new(AppState::new(movies)));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
