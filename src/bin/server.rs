//! Pessoas server: reads settings from the environment (and `.env`), prepares the store, serves the API.

use pessoas_api::{
    app,
    apply_migrations,
    ensure_database_exists,
    AppState,
    InMemoryPersonRepository,
    PersonRepository,
    PgPersonRepository,
    Settings,
    StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pessoas_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let repo: Arc<dyn PersonRepository> = match settings.store {
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            apply_migrations(&pool, &settings.schema).await?;
            Arc::new(PgPersonRepository::new(pool, &settings.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            Arc::new(InMemoryPersonRepository::new())
        }
    };

    let router = app(AppState::new(repo), settings.body_limit);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(store = ?settings.store, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
