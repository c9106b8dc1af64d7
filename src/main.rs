use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syllasync::api::router;
use syllasync::calendar::CalendarHttpClient;
use syllasync::config::AppConfig;
use syllasync::extraction::HttpExtractor;
use syllasync::ids::UuidGenerator;
use syllasync::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "syllasync=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    info!("extraction endpoint: {}", config.extraction_url);
    info!("calendar endpoint: {}", config.calendar_sync_url);

    let extractor = Arc::new(HttpExtractor::new(config.extraction_url.clone())?);
    let calendar = Arc::new(CalendarHttpClient::new(
        config.calendar_sync_url.clone(),
        config.sync_timeout,
    )?);

    let state = AppState::new(Arc::new(UuidGenerator), extractor, calendar);

    let app = router(state);

    info!("listening on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
