use service_core::error::AppError;
use service_core::observability::init_tracing;
use summarizer_service::config::SummarizerConfig;
use summarizer_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Load configuration - fail fast if invalid
    let config = SummarizerConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_tracing(
        "summarizer-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.groq.model,
        "Starting summarizer service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("HTTP server error: {}", e);
        AppError::from(e)
    })?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
