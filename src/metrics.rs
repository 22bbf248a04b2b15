use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("careerforge_requests_total", "Total number of generation requests")
            .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "careerforge_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_FAILURES: Counter = register_counter!(
        "careerforge_upstream_failures_total",
        "Failed upstream completion calls"
    )
    .unwrap();
    pub static ref DOMAIN_LOOKUPS: Counter = register_counter!(
        "careerforge_domain_lookups_total",
        "DNS-over-HTTPS lookups issued"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "careerforge_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref RATE_ENTRIES: Gauge = register_gauge!(
        "careerforge_rate_entries",
        "Live entries across the rate-limit maps"
    )
    .unwrap();
}
