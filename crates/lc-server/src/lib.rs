//! Label normalization HTTP API server (Axum).
//!
//! Endpoints: `POST /normalize` (batch), `POST /normalize-text`,
//! `POST /analyze` and `GET /health`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::Router;
use config::{CorsConfig, ServiceConfig};
use error::ApiError;
use state::AppState;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "internal error".to_string()
    };
    ApiError::internal(message).into_response()
}

/// Build the router over an existing state, without CORS.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::normalize_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the full application from configuration. Fails if the lexicon
/// cannot be loaded or the configuration is invalid.
pub fn app(config: &ServiceConfig) -> Result<Router> {
    let state = AppState::from_config(&config.lexicon).context("initializing normalizer")?;
    Ok(app_with_state(state).layer(cors_layer(&config.cors)?))
}

#[cfg(test)]
mod tests;
