use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerateResponse, MAX_INPUT_LEN, ToolRequest, Usage};
use crate::prompt;
use crate::state::AppState;

use super::client_key;

// career tools handler: validate, rate-check, prompt, complete, respond
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ToolRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start = Instant::now();

    let Json(request) =
        payload.map_err(|_| ApiError::Validation("Invalid request body.".to_string()))?;

    let input = request.input.trim();
    if input.is_empty() {
        return Err(ApiError::Validation(
            "Please describe your experience.".to_string(),
        ));
    }
    if input.chars().count() > MAX_INPUT_LEN {
        return Err(ApiError::Validation(
            "Input is too long (5000 characters max).".to_string(),
        ));
    }

    if !state.career_limiter.allow(&client_key(&headers)) {
        RATE_LIMITED_TOTAL.inc();
        return Err(ApiError::RateLimited);
    }

    let prompt = prompt::build(request.tool, input, &request.options);
    let def = request.tool.def();

    tracing::debug!(tool = ?request.tool, "running career generation");

    let completion = state
        .completion
        .complete(&prompt, def.max_tokens, def.temperature)
        .await?;

    REQUEST_LATENCY.observe(start.elapsed().as_secs_f64());

    Ok(Json(GenerateResponse {
        result: completion.text,
        usage: Some(Usage {
            tokens: completion.tokens,
        }),
    }))
}
