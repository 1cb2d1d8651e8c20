use chrono::Local;
use habit_tracker::models::UiState;
use habit_tracker::{ApiClient, AppState, config, router};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let api_url = config::resolve_api_url();
    info!("using records API at {api_url}");

    let state = AppState::new(
        ApiClient::new(api_url),
        UiState::new(Local::now().date_naive()),
    );
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::resolve_port()));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
