use backend::shared::config;
use backend::shared::data::db;
use backend::shared::state::AppState;
use backend::{routes, system};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let missing = config.missing_settings();
    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required configuration in config.toml: {}",
            missing.join(", ")
        );
    }

    let conn = db::initialize_database(&config.database.url)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
    tracing::info!("Database connection established");

    let addr = config.bind_address()?;
    let state = AppState::new(conn, config);
    let app = routes::configure_routes(state);

    tracing::info!("Store Operations API listening on http://{}", addr);
    println!("Dashboard: http://{}/dashboard/", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
