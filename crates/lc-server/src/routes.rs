use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use lc_engine::{ChangedWord, NormalizationResult};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const SERVICE_NAME: &str = "Intelligent Label Normalization Service";

/// Analysis of one request value. Non-string values are echoed back
/// unchanged rather than failing the request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LabelAnalysis {
    Text(NormalizationResult),
    Passthrough {
        original: Value,
        normalized: Value,
        changed: bool,
        preserved_terms: Vec<String>,
        changed_words: Vec<ChangedWord>,
    },
}

impl LabelAnalysis {
    fn normalized(&self) -> Value {
        match self {
            LabelAnalysis::Text(r) => Value::String(r.normalized.clone()),
            LabelAnalysis::Passthrough { normalized, .. } => normalized.clone(),
        }
    }

    fn preserved_terms(&self) -> &[String] {
        match self {
            LabelAnalysis::Text(r) => &r.preserved_terms,
            LabelAnalysis::Passthrough { preserved_terms, .. } => preserved_terms,
        }
    }
}

fn analyze_value(state: &AppState, value: &Value) -> LabelAnalysis {
    match value {
        Value::String(text) => LabelAnalysis::Text(state.normalizer.analyze_text(text)),
        other => LabelAnalysis::Passthrough {
            original: other.clone(),
            normalized: other.clone(),
            changed: false,
            preserved_terms: Vec::new(),
            changed_words: Vec::new(),
        },
    }
}

/// Request bodies must be JSON objects.
fn object_body(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match body? {
        Json(Value::Object(map)) => Ok(map),
        Json(_) => Err(ApiError::bad_request("Request body must be a JSON object")),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn normalize_routes() -> Router<AppState> {
    Router::new()
        .route("/normalize", post(normalize_labels))
        .route("/normalize-text", post(normalize_text))
        .route("/analyze", post(analyze))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "terms": state.normalizer.registry().len(),
    }))
}

async fn normalize_labels(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = object_body(body)?;
    let results: Vec<LabelAnalysis> = match body.get("labels") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(labels)) => labels.iter().map(|l| analyze_value(&state, l)).collect(),
        Some(_) => return Err(ApiError::bad_request("labels must be an array")),
    };
    tracing::debug!(count = results.len(), "normalized label batch");
    Ok(Json(json!({
        "success": true,
        "results": results,
    })))
}

async fn normalize_text(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = object_body(body)?;
    let text = body.get("text").unwrap_or(&Value::Null);
    if is_blank(text) {
        return Err(ApiError::bad_request("No text provided"));
    }
    let analysis = analyze_value(&state, text);
    Ok(Json(json!({
        "normalized_text": analysis.normalized(),
        "preserved_terms": analysis.preserved_terms(),
        "success": true,
    })))
}

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = object_body(body)?;
    let analysis = match body.get("text") {
        None => LabelAnalysis::Text(NormalizationResult::unchanged("")),
        Some(text) => analyze_value(&state, text),
    };
    Ok(Json(json!({
        "success": true,
        "analysis": analysis,
    })))
}
