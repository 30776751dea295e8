// Web server — Axum-based JSON API.
//
// All /api/* routes serve JSON and sit behind the CORS policy from Config.
// /health is public and outside the CORS-restricted prefix.
//
// Handlers are stateless apart from AppState, which is read-only after
// startup: the injected polarity analyzer and the loaded configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AllowedOrigins, Config};
use crate::sentiment::traits::PolarityAnalyzer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn PolarityAnalyzer>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self {
            analyzer,
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits (Ctrl-C stops it).
pub async fn run_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.bind, state.config.port);
    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("tonemeter listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("tonemeter stopped");
    Ok(())
}

/// Build the full router. Fails only if a configured CORS origin isn't a
/// valid header value.
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.allowed_origins)?;

    let api = Router::new()
        .route("/api/predict", post(handlers::predict::predict))
        .route(
            "/api/predict-file",
            post(handlers::predict_file::predict_file),
        )
        .layer(cors);

    Ok(Router::new()
        .merge(api)
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origins: &AllowedOrigins) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origins {
        AllowedOrigins::Any => Ok(layer.allow_origin(Any)),
        AllowedOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid CORS origin {origin:?}"))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(layer.allow_origin(AllowOrigin::list(values)))
        }
    }
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

/// Typed JSON error response helper. Every error body is `{"error": message}`.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
