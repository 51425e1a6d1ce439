//! HTTP request-response service
//!
//! `POST /` takes an optional JSON body of generation parameters and answers
//! with a PNG. Generation is synchronous, so it runs on the blocking pool
//! under a wall-clock timeout. `GET /_healthz` (also `/_healtz`) reports the
//! service version.

use crate::algorithm::executor::{SynthesisConfig, Synthesizer};
use crate::io::cli::time_seed;
use crate::io::configuration::ServiceConfig;
use crate::io::error::{Result, SynthesisError};
use crate::io::image::encode_png;
use crate::io::loader::load_tile_set;
use crate::service::request::parse_request;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;

/// Path of the health endpoint
pub const HEALTH_PATH: &str = "/_healthz";
/// Older spelling of [`HEALTH_PATH`] still probed by existing deployments
pub const LEGACY_HEALTH_PATH: &str = "/_healtz";

/// Body of the health endpoint
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Deployed service version
    pub version: String,
}

#[derive(Clone)]
struct AppState {
    config: Arc<ServiceConfig>,
}

/// Build the service router
pub fn router(config: Arc<ServiceConfig>) -> Router {
    Router::new()
        .route("/", post(generate))
        .route(HEALTH_PATH, get(health))
        .route(LEGACY_HEALTH_PATH, get(health))
        .with_state(AppState { config })
}

/// HTTP status for a failed generation
pub const fn status_for(error: &SynthesisError) -> StatusCode {
    if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Load the tile set, synthesize and encode the result as PNG
///
/// Tiles are reloaded on every call so requests share no mutable state.
///
/// # Errors
///
/// Returns an error if loading fails, the parameters are invalid, the solver
/// finds no solution, or encoding fails
pub fn generate_png(config: &ServiceConfig, synthesis: &SynthesisConfig) -> Result<Vec<u8>> {
    let tiles = load_tile_set(&config.tiles_dir, &config.fingerprinter)?;
    let (image, outcome) = Synthesizer::new(&tiles, &config.border)
        .synthesize(synthesis)?
        .into_parts();
    outcome?;
    encode_png(&image)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        version: state.config.version.clone(),
    })
}

async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let synthesis = match parse_request(&body, time_seed()) {
        Ok(synthesis) => synthesis,
        Err(error) => return error_response(&error),
    };
    info!(
        "generation request: {}x{} cells, {} attempts",
        synthesis.width, synthesis.height, synthesis.max_attempts
    );

    let config = Arc::clone(&state.config);
    let timeout = config.request_timeout;
    let task = tokio::task::spawn_blocking(move || generate_png(&config, &synthesis));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(png))) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Ok(Ok(Err(error))) => error_response(&error),
        Ok(Err(join_error)) => {
            error!("generation task failed: {join_error}");
            (StatusCode::INTERNAL_SERVER_ERROR, join_error.to_string()).into_response()
        }
        Err(elapsed) => {
            warn!("generation exceeded {timeout:?}: {elapsed}");
            (StatusCode::GATEWAY_TIMEOUT, "generation timed out").into_response()
        }
    }
}

fn error_response(error: &SynthesisError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        error!("generation failed: {error}");
    } else {
        warn!("rejected request: {error}");
    }
    (status, error.to_string()).into_response()
}

/// Serve requests on `config.port` until interrupted
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| SynthesisError::Server {
            operation: "bind",
            source: e,
        })?;
    info!("Listening on port {}", config.port);

    axum::serve(listener, router(Arc::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SynthesisError::Server {
            operation: "serve",
            source: e,
        })
}

/// Run [`serve`] on a new multi-threaded runtime, blocking until shutdown
///
/// # Errors
///
/// Returns an error if the runtime cannot start or [`serve`] fails
pub fn serve_blocking(config: ServiceConfig) -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| SynthesisError::Server {
            operation: "start runtime",
            source: e,
        })?
        .block_on(serve(config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("unable to listen for shutdown signal: {e}");
    }
    info!("shutting down");
}
