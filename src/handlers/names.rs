use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;

use crate::completion::parse_candidates;
use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{MAX_INPUT_LEN, NameRequest, NamesResponse};
use crate::prompt;
use crate::state::AppState;

use super::client_key;

// naming handler: validate, rate-check, prompt, complete, parse, then
// fan out one DNS check per candidate and join before responding
pub async fn names_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<Json<NamesResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start = Instant::now();

    let Json(request) =
        payload.map_err(|_| ApiError::Validation("Invalid request body.".to_string()))?;

    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::Validation(
            "Please describe your business.".to_string(),
        ));
    }
    if query.chars().count() > MAX_INPUT_LEN {
        return Err(ApiError::Validation(
            "Input is too long (5000 characters max).".to_string(),
        ));
    }

    if !state.naming_limiter.allow(&client_key(&headers)) {
        RATE_LIMITED_TOTAL.inc();
        return Err(ApiError::RateLimited);
    }

    let prompt = prompt::build_naming(query, &request.style);

    tracing::debug!(style = %request.style, "running name generation");

    let completion = state
        .completion
        .complete(&prompt, prompt::NAMING_MAX_TOKENS, prompt::NAMING_TEMPERATURE)
        .await?;

    let mut candidates = parse_candidates(&completion.text)?;
    candidates.truncate(prompt::NAME_COUNT);

    let names = state.domains.check_all(candidates).await;

    REQUEST_LATENCY.observe(start.elapsed().as_secs_f64());

    Ok(Json(NamesResponse { names }))
}
