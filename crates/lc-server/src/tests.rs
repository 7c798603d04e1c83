use crate::config::*;
use crate::state::AppState;
use crate::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lc_engine::{Normalizer, WordList};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tower::ServiceExt;

fn test_state() -> AppState {
    let words = WordList::from_words(["motor", "control", "address", "inverter", "plastic", "file"]);
    AppState::new(Normalizer::builder(Arc::new(words)).build().unwrap())
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = app_with_state(test_state()).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(req).await
}

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Intelligent Label Normalization Service");
    assert!(body["terms"].as_u64().unwrap() > 300);
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
}

// ========== /normalize-text ==========

#[tokio::test]
async fn test_normalize_text() {
    let (status, body) = post_json("/normalize-text", json!({ "text": "Motor control ECU" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["normalized_text"], "Motor Control ECU");
    assert_eq!(body["preserved_terms"], json!(["ECU"]));
}

#[tokio::test]
async fn test_normalize_text_missing() {
    let (status, body) = post_json("/normalize-text", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "No text provided" }));
}

#[tokio::test]
async fn test_normalize_text_empty() {
    let (status, body) = post_json("/normalize-text", json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_normalize_text_non_string_echoed() {
    let (status, body) = post_json("/normalize-text", json!({ "text": 42 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["normalized_text"], 42);
    assert_eq!(body["preserved_terms"], json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let req = Request::builder()
        .method("POST")
        .uri("/normalize-text")
        .header("content-type", "application/json")
        .body(Body::from("{\"text\": "))
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

// ========== /analyze ==========

#[tokio::test]
async fn test_analyze() {
    let (status, body) = post_json("/analyze", json!({ "text": "Motor control ECU" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let a = &body["analysis"];
    assert_eq!(a["original"], "Motor control ECU");
    assert_eq!(a["normalized"], "Motor Control ECU");
    assert_eq!(a["changed"], true);
    assert_eq!(a["preserved_terms"], json!(["ECU"]));
    assert_eq!(
        a["changed_words"],
        json!([{ "original": "control", "normalized": "Control", "position": 1 }])
    );
}

#[tokio::test]
async fn test_analyze_missing_text() {
    let (status, body) = post_json("/analyze", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["original"], "");
    assert_eq!(body["analysis"]["changed"], false);
}

// ========== /normalize ==========

#[tokio::test]
async fn test_normalize_batch_order() {
    let labels = json!({ "labels": ["ABS plastic", "e-mail address", "dc-ac inverter"] });
    let (status, body) = post_json("/normalize", labels).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["normalized"], "ABS Plastic");
    assert_eq!(results[1]["normalized"], "e-mail Address");
    assert_eq!(results[2]["normalized"], "DC-AC Inverter");
}

#[tokio::test]
async fn test_normalize_batch_isolates_items() {
    let (status, body) = post_json("/normalize", json!({ "labels": ["pdf file", null, 7, ""] })).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["normalized"], "PDF File");
    assert_eq!(results[1]["original"], Value::Null);
    assert_eq!(results[2]["normalized"], 7);
    assert_eq!(results[2]["changed"], false);
    assert_eq!(results[3]["normalized"], "");
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    for body in [json!([1, 2]), json!("x")] {
        let (status, resp) = post_json("/normalize", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["success"], false);
        let (status, _) = post_json("/analyze", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_normalize_no_labels() {
    let (status, body) = post_json("/normalize", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_normalize_labels_not_array() {
    let (status, body) = post_json("/normalize", json!({ "labels": "motor" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_unknown_route() {
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let resp = app_with_state(test_state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ========== CORS ==========

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let app = app(&ServiceConfig::default()).unwrap();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/normalize")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
}

#[test]
fn test_cors_rejects_invalid_origin() {
    let cors = CorsConfig { allowed_origins: vec!["bad\norigin".into()] };
    assert!(cors_layer(&cors).is_err());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = ServiceConfig::default();
    assert_eq!(c.server.host, "127.0.0.1");
    assert_eq!(c.server.port, 5000);
    assert!(c.lexicon.path.is_none());
    assert_eq!(c.cors.allowed_origins.len(), 5);
    assert_eq!(c.server.socket_addr().unwrap().port(), 5000);
}

#[test]
fn test_config_env_overrides() {
    let c = ServiceConfig::load_from(vars(&[
        (PORT_ENV, "8080"),
        (HOST_ENV, "0.0.0.0"),
        (LEXICON_ENV, "/srv/words.txt"),
        (CORS_ENV, "http://a.example, http://b.example,"),
    ]))
    .unwrap();
    assert_eq!(c.server.port, 8080);
    assert_eq!(c.server.host, "0.0.0.0");
    assert_eq!(c.lexicon.path.as_deref(), Some(std::path::Path::new("/srv/words.txt")));
    assert_eq!(c.cors.allowed_origins, vec!["http://a.example", "http://b.example"]);
}

#[test]
fn test_config_bad_port() {
    assert!(ServiceConfig::load_from(vars(&[(PORT_ENV, "http")])).is_err());
}

#[test]
fn test_config_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"server": {{"port": 9000}}, "lexicon": {{"path": "/tmp/w.json"}}}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let c = ServiceConfig::load_from(vars(&[(CONFIG_ENV, path.as_str()), (HOST_ENV, "10.0.0.1")])).unwrap();
    assert_eq!(c.server.port, 9000);
    assert_eq!(c.server.host, "10.0.0.1");
    assert_eq!(c.lexicon.path.as_deref(), Some(std::path::Path::new("/tmp/w.json")));
    assert_eq!(c.cors, CorsConfig::default());
}

#[test]
fn test_startup_fails_on_missing_lexicon() {
    let mut config = ServiceConfig::default();
    config.lexicon.path = Some("/nonexistent/lexicon.txt".into());
    assert!(app(&config).is_err());
}

#[test]
fn test_state_from_lexicon_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "motor\ncontrol").unwrap();
    let state = AppState::from_config(&LexiconConfig { path: Some(file.path().to_path_buf()) }).unwrap();
    assert_eq!(state.normalizer.normalize_text("MOTOR CONTROLLER"), "MOTOR CONTROLLER");
    assert_eq!(state.normalizer.normalize_text("motor control"), "Motor Control");
}
