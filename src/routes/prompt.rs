use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use serde_json::{Value, error::Category};
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    message::{PromptRequest, PromptResponse},
    state::SharedState,
};

pub async fn prompt_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PromptResponse>, AppError> {
    info!("Received POST request");

    let body = body.map_err(|e| {
        error!(error = %e, "Server error: failed to read request body");
        AppError::Internal(e.into())
    })?;

    let user_text = parse_request(&body)?.into_text();
    info!(text = %user_text, "Processing text");

    let prompt = match state.generator.generate(&user_text).await {
        Ok(generated) => {
            info!(prompt = %generated, "Generated prompt");
            generated
        }
        Err(e) => {
            warn!(error = %e, upstream = state.generator.url(), "Upstream error, falling back to input text");
            user_text
        }
    };

    Ok(Json(PromptResponse { prompt }))
}

// Unparseable bytes are the caller's fault (400). Valid JSON that is not an object is a 500.
fn parse_request(body: &[u8]) -> Result<PromptRequest, AppError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Syntax | Category::Eof | Category::Data => {
            warn!(error = %e, "Invalid JSON in request body");
            AppError::InvalidJson(e)
        }
        Category::Io => {
            error!(error = %e, "Server error: failed to read request JSON");
            AppError::Internal(e.into())
        }
    })?;

    PromptRequest::from_value(value).ok_or_else(|| {
        error!("Server error: request body is not a JSON object");
        AppError::Internal(anyhow::anyhow!("request body is not a JSON object"))
    })
}
