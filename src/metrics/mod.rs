//! Basic metrics instrumentation for routing and validation.
//!
//! Provides counters and duration tracking for county lookups, routing
//! outcomes per region, and VIN validations.

use crate::routing::Region;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// County lookups attempted
    lookups_total: Arc<AtomicU64>,

    /// County lookups that failed (any reason, timeouts included)
    lookup_errors_total: Arc<AtomicU64>,

    /// County lookups cut off by the timeout
    lookup_timeouts_total: Arc<AtomicU64>,

    /// Total duration of all county lookups in milliseconds
    lookup_duration_total_ms: Arc<AtomicU64>,

    /// Routes to the coast number (coastal band and Richmond ring)
    routes_coast_total: Arc<AtomicU64>,

    /// Routes to the inland-north number
    routes_inland_north_total: Arc<AtomicU64>,

    /// Routes that fell through to the default number
    routes_default_total: Arc<AtomicU64>,

    vins_accepted_total: Arc<AtomicU64>,
    vins_rejected_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            lookups_total: Arc::new(AtomicU64::new(0)),
            lookup_errors_total: Arc::new(AtomicU64::new(0)),
            lookup_timeouts_total: Arc::new(AtomicU64::new(0)),
            lookup_duration_total_ms: Arc::new(AtomicU64::new(0)),
            routes_coast_total: Arc::new(AtomicU64::new(0)),
            routes_inland_north_total: Arc::new(AtomicU64::new(0)),
            routes_default_total: Arc::new(AtomicU64::new(0)),
            vins_accepted_total: Arc::new(AtomicU64::new(0)),
            vins_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a county lookup with duration.
    pub fn record_lookup(&self, duration: Duration) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        self.lookup_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed county lookup.
    pub fn record_lookup_error(&self) {
        self.lookup_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a county lookup that hit the timeout.
    pub fn record_lookup_timeout(&self) {
        self.lookup_timeouts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record which number a request was routed to.
    pub fn record_route(&self, region: Option<Region>) {
        let counter = match region {
            Some(Region::Coastal) | Some(Region::CoastalInlandToRichmond) => {
                &self.routes_coast_total
            }
            Some(Region::InlandNorth) => &self.routes_inland_north_total,
            None => &self.routes_default_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a VIN validation outcome.
    pub fn record_vin_validation(&self, is_valid: bool) {
        let counter = if is_valid {
            &self.vins_accepted_total
        } else {
            &self.vins_rejected_total
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    pub fn lookup_errors_total(&self) -> u64 {
        self.lookup_errors_total.load(Ordering::Relaxed)
    }

    pub fn lookup_timeouts_total(&self) -> u64 {
        self.lookup_timeouts_total.load(Ordering::Relaxed)
    }

    pub fn lookup_duration_total_ms(&self) -> u64 {
        self.lookup_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average county lookup duration in milliseconds.
    pub fn lookup_duration_avg_ms(&self) -> f64 {
        let total = self.lookup_duration_total_ms();
        let count = self.lookups_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn routes_coast_total(&self) -> u64 {
        self.routes_coast_total.load(Ordering::Relaxed)
    }

    pub fn routes_inland_north_total(&self) -> u64 {
        self.routes_inland_north_total.load(Ordering::Relaxed)
    }

    pub fn routes_default_total(&self) -> u64 {
        self.routes_default_total.load(Ordering::Relaxed)
    }

    pub fn vins_accepted_total(&self) -> u64 {
        self.vins_accepted_total.load(Ordering::Relaxed)
    }

    pub fn vins_rejected_total(&self) -> u64 {
        self.vins_rejected_total.load(Ordering::Relaxed)
    }

    /// Share of routes that ended on the default number (0.0 to 1.0).
    pub fn fallback_rate(&self) -> f64 {
        let fallbacks = self.routes_default_total();
        let total = fallbacks + self.routes_coast_total() + self.routes_inland_north_total();
        if total == 0 {
            0.0
        } else {
            fallbacks as f64 / total as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            lookups_total: self.lookups_total(),
            lookup_errors_total: self.lookup_errors_total(),
            lookup_timeouts_total: self.lookup_timeouts_total(),
            lookup_duration_avg_ms: self.lookup_duration_avg_ms(),
            routes_coast_total: self.routes_coast_total(),
            routes_inland_north_total: self.routes_inland_north_total(),
            routes_default_total: self.routes_default_total(),
            vins_accepted_total: self.vins_accepted_total(),
            vins_rejected_total: self.vins_rejected_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub lookups_total: u64,
    pub lookup_errors_total: u64,
    pub lookup_timeouts_total: u64,
    pub lookup_duration_avg_ms: f64,
    pub routes_coast_total: u64,
    pub routes_inland_north_total: u64,
    pub routes_default_total: u64,
    pub vins_accepted_total: u64,
    pub vins_rejected_total: u64,
}

/// Helper for timing county lookups.
pub struct LookupTimer {
    start: Instant,
    metrics: Metrics,
}

impl LookupTimer {
    /// Start timing a lookup.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_lookup(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_lookup(self.start.elapsed());
        self.metrics.record_lookup_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.lookups_total(), 0);
        assert_eq!(metrics.routes_default_total(), 0);
        assert_eq!(metrics.fallback_rate(), 0.0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_lookup(Duration::from_millis(100));
        metrics.record_lookup(Duration::from_millis(200));
        assert_eq!(metrics.lookups_total(), 2);
        assert_eq!(metrics.lookup_duration_total_ms(), 300);
        assert_eq!(metrics.lookup_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_record_route_by_region() {
        let metrics = Metrics::new();
        metrics.record_route(Some(Region::Coastal));
        metrics.record_route(Some(Region::CoastalInlandToRichmond));
        metrics.record_route(Some(Region::InlandNorth));
        metrics.record_route(None);

        assert_eq!(metrics.routes_coast_total(), 2);
        assert_eq!(metrics.routes_inland_north_total(), 1);
        assert_eq!(metrics.routes_default_total(), 1);
        assert_eq!(metrics.fallback_rate(), 0.25);
    }

    #[test]
    fn test_record_vin_validation() {
        let metrics = Metrics::new();
        metrics.record_vin_validation(true);
        metrics.record_vin_validation(false);
        metrics.record_vin_validation(false);

        let summary = metrics.summary();
        assert_eq!(summary.vins_accepted_total, 1);
        assert_eq!(summary.vins_rejected_total, 2);
    }

    #[test]
    fn test_lookup_timer() {
        let metrics = Metrics::new();
        let timer = LookupTimer::new(metrics.clone());
        thread::sleep(Duration::from_millis(10));
        timer.complete();

        assert_eq!(metrics.lookups_total(), 1);
        assert!(metrics.lookup_duration_total_ms() >= 10);
    }

    #[test]
    fn test_lookup_timer_with_error() {
        let metrics = Metrics::new();
        let timer = LookupTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.lookups_total(), 1);
        assert_eq!(metrics.lookup_errors_total(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_route(None);
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_route(Some(Region::InlandNorth));
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.routes_default_total(), 100);
        assert_eq!(metrics.routes_inland_north_total(), 100);
    }
}
