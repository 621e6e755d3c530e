#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use prompt_relay::{config::RelayConfig, routes::create_router, state::AppState};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const SAILOR: &str = " A weathered old sailor, weary eyes, dramatic side lighting. ";

/// Serves `app` on an ephemeral local port and returns its generate URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/generate")
}

/// A URL nothing listens on.
pub async fn refused_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/generate")
}

/// Upstream that answers every generate call with a fixed status and raw body.
pub async fn fixed_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/api/generate",
        post(move || async move { (status, body).into_response() }),
    );
    spawn_upstream(app).await
}

/// Upstream that answers with `response` and counts how often it was called.
pub async fn counting_upstream(response: &'static str) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/api/generate",
            post(move |State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "response": response, "done": true }))
            }),
        )
        .with_state(hits.clone());
    (spawn_upstream(app).await, hits)
}

/// Upstream that stores every payload it receives and echoes the prompt back padded.
pub async fn recording_upstream() -> (String, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/api/generate",
            post(
                |State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(payload): Json<Value>| async move {
                    let prompt = payload["prompt"].as_str().unwrap_or_default().to_string();
                    seen.lock().unwrap().push(payload);
                    Json(json!({ "response": format!("  {prompt}\n") }))
                },
            ),
        )
        .with_state(seen.clone());
    (spawn_upstream(app).await, seen)
}

pub fn relay(upstream_url: &str) -> Router {
    let config = RelayConfig::with_upstream(upstream_url);
    create_router().with_state(Arc::new(AppState::new(&config).unwrap()))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
