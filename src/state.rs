use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::domains::DomainOracle;
use crate::rate_limit::RateLimiter;

// app's shared state, one instance behind an Arc

pub struct AppState {
    pub completion: CompletionClient,
    pub domains: DomainOracle,
    // each endpoint carries its own limit/window configuration
    pub career_limiter: Arc<RateLimiter>,
    pub naming_limiter: Arc<RateLimiter>,
}
