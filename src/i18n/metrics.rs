//! Lookup metrics.
//!
//! Counts how each resolution was satisfied: from the active language, from
//! the fallback language, or not at all (the raw key was returned). Counting
//! never changes what the resolver returns.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// How a single lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Found in the active language tree
    Active,

    /// Missing from the active tree, found in the fallback tree
    Fallback,

    /// Found in neither tree; the key itself was returned
    Missing,
}

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Lookups answered by the active language
    active_hits: AtomicUsize,

    /// Lookups answered by the fallback language
    fallback_hits: AtomicUsize,

    /// Lookups that returned the raw key
    misses: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            active_hits: AtomicUsize::new(0),
            fallback_hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        })
    }

    /// Record the outcome of one lookup.
    pub fn record(&self, outcome: LookupOutcome) {
        let counter = match outcome {
            LookupOutcome::Active => &self.active_hits,
            LookupOutcome::Fallback => &self.fallback_hits,
            LookupOutcome::Missing => &self.misses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn active_hits(&self) -> usize {
        self.active_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let active = self.active_hits();
        let fallback = self.fallback_hits();
        let misses = self.misses();
        let total = active + fallback + misses;

        let percent = |count: usize| {
            if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };

        MetricsReport {
            lookups: total,
            active_hits: active,
            fallback_hits: fallback,
            misses,
            fallback_rate: percent(fallback),
            miss_rate: percent(misses),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.active_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups recorded
    pub lookups: usize,

    /// Lookups answered by the active language
    pub active_hits: usize,

    /// Lookups answered by the fallback language
    pub fallback_hits: usize,

    /// Lookups that returned the raw key
    pub misses: usize,

    /// Fallback share as a percentage (0-100)
    pub fallback_rate: f64,

    /// Miss share as a percentage (0-100)
    pub miss_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn reset_metrics() {
        LookupMetrics::global().reset();
    }

    // ==================== Counter Tests ====================

    #[test]
    #[serial]
    fn test_record_each_outcome() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        metrics.record(LookupOutcome::Active);
        metrics.record(LookupOutcome::Active);
        metrics.record(LookupOutcome::Fallback);
        metrics.record(LookupOutcome::Missing);

        assert_eq!(metrics.active_hits(), 2);
        assert_eq!(metrics.fallback_hits(), 1);
        assert_eq!(metrics.misses(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    #[serial]
    fn test_report_empty() {
        reset_metrics();
        let report = LookupMetrics::global().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.fallback_rate, 0.0);
        assert_eq!(report.miss_rate, 0.0);
    }

    #[test]
    #[serial]
    fn test_report_rates() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        // 2 active, 1 fallback, 1 miss = 25% fallback, 25% miss
        metrics.record(LookupOutcome::Active);
        metrics.record(LookupOutcome::Active);
        metrics.record(LookupOutcome::Fallback);
        metrics.record(LookupOutcome::Missing);

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.fallback_rate, 25.0);
        assert_eq!(report.miss_rate, 25.0);
    }

    #[test]
    #[serial]
    fn test_report_serializes_to_json() {
        reset_metrics();
        LookupMetrics::global().record(LookupOutcome::Missing);

        let json = serde_json::to_value(LookupMetrics::global().report())
            .expect("Should serialize");
        assert_eq!(json["misses"], 1);
        assert_eq!(json["miss_rate"], 100.0);
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = LookupMetrics::global();
        let metrics2 = LookupMetrics::global();

        assert!(std::ptr::eq(metrics1, metrics2));
    }
}
