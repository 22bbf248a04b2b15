mod generate;
mod health;
mod metrics;
mod names;


pub use generate::generate_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use names::names_handler;

use axum::http::HeaderMap;

// Client identity for rate limiting: first hop of x-forwarded-for when a
// proxy supplies it, otherwise a shared catch-all bucket.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
