mod completion;
mod config;
mod domains;
mod error;
mod handlers;
mod metrics;
mod models;
mod prompt;
mod rate_limit;
mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::{get, post};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::completion::CompletionClient;
use crate::config::Args;
use crate::domains::DomainOracle;
use crate::error::ApiError;
use crate::rate_limit::{RateLimiter, sweeper};
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // creating shared state
    let state = Arc::new(build_state(&args));

    // spawn the background sweeper keeping the rate maps bounded
    tokio::spawn(sweeper(
        state.career_limiter.clone(),
        state.naming_limiter.clone(),
        Duration::from_secs(args.sweep_interval),
    ));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("careerforge running on http://localhost:{}", args.port);
    info!("upstream: {} (model {})", args.upstream_url, args.model);
    info!(
        "rate limits: career {}/{}s, naming {}/{}s",
        args.career_rate_limit, args.rate_window, args.naming_rate_limit, args.rate_window
    );

    axum::serve(listener, app).await.unwrap();
}

fn build_state(args: &Args) -> AppState {
    let client = reqwest::Client::new();

    AppState {
        completion: CompletionClient::new(
            client.clone(),
            args.upstream_url.clone(),
            args.api_key.clone(),
            args.model.clone(),
        ),
        domains: DomainOracle::new(
            client,
            args.doh_url.clone(),
            Duration::from_secs(args.dns_timeout),
        ),
        career_limiter: Arc::new(RateLimiter::new(
            args.career_rate_limit,
            Duration::from_secs(args.rate_window),
        )),
        naming_limiter: Arc::new(RateLimiter::new(
            args.naming_rate_limit,
            Duration::from_secs(args.rate_window),
        )),
    }
}

// creating the router with routes; shared with the handler tests
fn router(state: Arc<AppState>) -> Router {
    // browser callers from any origin; preflight is answered by the layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/generate", post(handlers::generate_handler))
        .route("/api/names", post(handlers::names_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
