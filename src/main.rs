mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod recorder;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("dummy-print-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app::router(state)).await?;

    Ok(())
}
