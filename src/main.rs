use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vod_functions::app::create_app;
use vod_functions::config::settings::AppConfig;
use vod_functions::infrastructure::media::client::AzureMediaClient;
use vod_functions::infrastructure::storage::azure::AzureBlobStorage;
use vod_functions::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting server...");

    let config = AppConfig::new()?;
    if config.function_key.is_none() {
        info!("FUNCTION_KEY is not set, function routes are open");
    }

    let media = AzureMediaClient::new(config.media.clone())?;
    let blobs = AzureBlobStorage::new(&config.blob_endpoint)?;
    let port = config.server_port;

    let state = AppState::new(config, Arc::new(media), Arc::new(blobs));
    let app = create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
