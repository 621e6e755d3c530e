// src/routes/mod.rs
pub mod prompt;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::{Method, header::CONTENT_TYPE},
    middleware::{self, Next},
    response::Response,
    routing::{MethodRouter, get, post},
};
use prompt::prompt_handler;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

pub fn create_router() -> Router<SharedState> {
    // Answers every OPTIONS itself, before routing.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let submit: MethodRouter<SharedState> = post(prompt_handler);

    Router::new()
        .route("/health", get(|| async { "OK" }).post(prompt_handler))
        .route("/", submit.clone())
        .route("/{*path}", submit)
        .layer(trace)
        .layer(cors)
        .layer(middleware::from_fn(log_preflight))
}

// Sits outside the CORS layer, which never forwards preflights.
async fn log_preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        info!(path = %req.uri().path(), "Received OPTIONS request");
    }
    next.run(req).await
}
