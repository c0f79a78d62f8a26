//! Metrics and observability for the notary anchor service
//!
//! In-process counters and gauges, surfaced through the `/stats` endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

/// Well-known counter names
pub mod counters {
    pub const UPLOADS_PREPARED: &str = "uploads.prepared";
    pub const UPLOADS_FAILED: &str = "uploads.failed";
    pub const VERIFICATIONS_FOUND: &str = "verifications.found";
    pub const VERIFICATIONS_NOT_FOUND: &str = "verifications.not_found";
    pub const VERIFICATIONS_FAILED: &str = "verifications.failed";
    pub const RECORD_LOOKUPS: &str = "record_lookups";
}

/// Global metrics registry
pub struct MetricsRegistry {
    counters: RwLock<HashMap<String, Arc<AtomicU64>>>,
    start_time: Instant,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            counters: RwLock::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Increment a counter
    pub async fn inc_counter(&self, name: &str) {
        let counters = self.counters.read().await;
        if let Some(counter) = counters.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }
        drop(counters);

        let mut counters = self.counters.write().await;
        counters
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get a counter value
    pub async fn get_counter(&self, name: &str) -> u64 {
        let counters = self.counters.read().await;
        counters
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Seconds since the registry was created
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Snapshot all counters for the stats endpoint
    pub async fn snapshot(&self) -> serde_json::Value {
        let counters = self.counters.read().await;
        let values: HashMap<&str, u64> = counters
            .iter()
            .map(|(name, c)| (name.as_str(), c.load(Ordering::Relaxed)))
            .collect();

        serde_json::json!({
            "uptime_seconds": self.uptime_seconds(),
            "counters": values,
        })
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counter_starts_at_zero() {
        let metrics = MetricsRegistry::new();
        assert_eq!(metrics.get_counter("nope").await, 0);
    }

    #[tokio::test]
    async fn test_counter_increments() {
        let metrics = MetricsRegistry::new();
        metrics.inc_counter(counters::UPLOADS_PREPARED).await;
        metrics.inc_counter(counters::UPLOADS_PREPARED).await;
        assert_eq!(metrics.get_counter(counters::UPLOADS_PREPARED).await, 2);
    }

    #[tokio::test]
    async fn test_snapshot_contains_counters() {
        let metrics = MetricsRegistry::new();
        metrics.inc_counter(counters::VERIFICATIONS_FOUND).await;

        let snap = metrics.snapshot().await;
        assert_eq!(snap["counters"][counters::VERIFICATIONS_FOUND], 1);
        assert!(snap["uptime_seconds"].is_u64());
    }
}
