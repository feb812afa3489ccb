use anyhow::Result;
use resume_review::{start_web_server, AppConfig};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_review=info,rocket::server=off")),
        )
        .init();

    let config = AppConfig::load()?;
    config.ensure_directories().await?;

    info!("Starting Resume Review API server");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!("Uploads: {}", config.upload_dir.display());
    info!("Extraction service: {}", config.extraction_url);
    info!("Server: http://0.0.0.0:{}", config.port);

    start_web_server(config).await
}
