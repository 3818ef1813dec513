//! Axum HTTP surface wiring the OCR and completion collaborators together.

pub mod analyze;
pub mod extract;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::ocr::TextRecognizer;
use crate::providers::CompletionProvider;

/// Shared handler state: the two external collaborators.
///
/// Both are stateless across requests; cloning the state clones two Arcs.
#[derive(Clone)]
pub struct AppState {
    pub recognizer: Arc<dyn TextRecognizer>,
    pub completion: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            recognizer,
            completion,
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/extract", post(extract::extract_ingredients))
        .route("/analyze", post(analyze::analyze_ingredients))
        // Label photos easily exceed axum's 2 MB default body limit
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, config: &ServerConfig) -> Result<(), std::io::Error> {
    let app = create_router(state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    info!("Listening on http://{}:{}", config.host, config.port);

    axum::serve(listener, app).await
}
