use crate::config::{ExtractorBackend, StatementConfig, TranscriberProvider};
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTranscriber};
use crate::services::providers::mock::MockTranscriber;
use crate::services::{HttpTextExtractor, TextExtractor, Transcriber, Utf8TextExtractor};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: StatementConfig,
    pub extractor: Arc<dyn TextExtractor>,
    pub transcriber: Arc<dyn Transcriber>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: StatementConfig) -> Result<Self, AppError> {
        let extractor: Arc<dyn TextExtractor> = match config.extractor.backend {
            ExtractorBackend::Http => Arc::new(HttpTextExtractor::new(&config.extractor.url)),
            ExtractorBackend::Utf8 => Arc::new(Utf8TextExtractor),
        };

        let transcriber: Arc<dyn Transcriber> = match config.transcriber.provider {
            TranscriberProvider::Gemini => {
                tracing::info!(model = %config.transcriber.model, "Initialized Gemini transcriber");
                Arc::new(GeminiTranscriber::new(GeminiConfig {
                    api_key: config.transcriber.api_key.clone(),
                    model: config.transcriber.model.clone(),
                }))
            }
            TranscriberProvider::Mock => {
                tracing::info!("Initialized mock transcriber");
                Arc::new(MockTranscriber::new(config.transcriber.mock_response.clone()))
            }
        };

        let state = AppState {
            config: config.clone(),
            extractor,
            transcriber,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/statements", post(handlers::upload_statement))
            .route("/api/statements/view", post(handlers::view_statement))
            .layer(DefaultBodyLimit::max(config.limits.max_upload_bytes))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
