use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::time::interval;

use crate::metrics::RATE_ENTRIES;

// Rate limit entry - tracks requests per client key
struct RateEntry {
    count: u32,
    window_start: Instant,
}

// Fixed-window rate limiter over a concurrent map. The dashmap entry
// guard serializes updates to a single key, so concurrent requests from
// the same client cannot lose increments. A burst straddling a window
// boundary can reach 2x the limit; acceptable for abuse mitigation.
pub struct RateLimiter {
    entries: DashMap<String, RateEntry>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    // true = request allowed. Denied calls never mutate the entry.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateEntry {
                count: 0,
                window_start: now,
            });

        // window expired? replace, don't increment
        if entry.window_start.elapsed() >= self.window {
            entry.count = 1;
            entry.window_start = now;
            return true;
        }

        if entry.count < self.limit {
            entry.count += 1;
            return true;
        }

        false
    }

    // Drop entries whose window has already expired
    pub fn sweep(&self) {
        let window = self.window;
        self.entries
            .retain(|_, entry| entry.window_start.elapsed() < window);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// Background sweep loop keeping the maps bounded, one tick per interval
pub async fn sweeper(career: Arc<RateLimiter>, naming: Arc<RateLimiter>, every: Duration) {
    let mut tick = interval(every);

    loop {
        tick.tick().await;

        career.sweep();
        naming.sweep();
        RATE_ENTRIES.set((career.len() + naming.len()) as f64);

        tracing::debug!(
            career = career.len(),
            naming = naming.len(),
            "swept rate-limit maps"
        );
    }
}
