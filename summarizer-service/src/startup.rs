//! Application startup and lifecycle management.
//!
//! Wires config, provider and router together and runs the HTTP server with
//! graceful shutdown.

use crate::config::{parse_origin, SummarizerConfig};
use crate::error::handle_panic;
use crate::handlers::{health::health_check, not_found::not_found, summarize::summarize};
use crate::services::providers::groq::GroqTextProvider;
use crate::services::providers::TextProvider;
use crate::services::SummarizationService;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, Request},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Transport-level cap on request bodies.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SummarizerConfig>,
    pub summarizer: SummarizationService,
}

impl AppState {
    pub fn new(config: SummarizerConfig, provider: Arc<dyn TextProvider>) -> Self {
        let summarizer = SummarizationService::new(provider, config.groq.model.clone());
        Self {
            config: Arc::new(config),
            summarizer,
        }
    }
}

/// Build the full router: routes, 404 fallback and the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.allowed_origins);

    Router::new()
        .route("/health", get(health_check).fallback(not_found))
        .route("/api/summarize", post(summarize).fallback(not_found))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| {
            parse_origin(o)
                .map_err(|e| tracing::error!("Ignoring CORS origin: {}", e))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application against the hosted Groq API.
    pub async fn build(config: SummarizerConfig) -> Result<Self, AppError> {
        let provider = GroqTextProvider::new(&config.groq).map_err(|e| {
            tracing::error!("Failed to initialize Groq provider: {}", e);
            AppError::ConfigError(anyhow::anyhow!("Groq provider error: {}", e))
        })?;

        tracing::info!(
            model = %config.groq.model,
            api_base = %config.groq.api_base,
            timeout_secs = config.groq.timeout_secs,
            "Initialized Groq text provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an explicit provider (port 0 = random port for testing).
    pub async fn build_with_provider(
        config: SummarizerConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Summarizer service listening on port {}", port);

        let router = build_router(AppState::new(config, provider));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
