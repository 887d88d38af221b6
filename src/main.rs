use anyhow::Result;
use datascope::{app_state::AppState, config::Config, routes, view};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Open the database read-only; this process never writes.
    let options = SqliteConnectOptions::new()
        .filename(config.db_path())
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    view::ensure_view_exists(&pool).await?;

    let app = routes::api_router(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "read proxy listening");
    info!(
        endpoint = %format!("http://{}/api/data", config.bind_addr()),
        "data endpoint"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
