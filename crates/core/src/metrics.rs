//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Classification outcomes (by result)
//! - Run poll loop behavior (checks per run)
//! - End-to-end classification duration

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Classification attempts total by result.
///
/// Results: "ok", "helpdesk_error", "assistant_error", "run_failed",
/// "poll_exhausted", "unrecognized_status", "malformed_verdict",
/// "empty_ticket_id".
pub static CLASSIFICATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "taggart_classifications_total",
            "Total ticket classification attempts",
        ),
        &["result"],
    )
    .unwrap()
});

/// End-to-end classification duration in seconds.
pub static CLASSIFY_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "taggart_classify_duration_seconds",
            "Duration of the full classification flow",
        )
        .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["result"],
    )
    .unwrap()
});

/// Status checks issued per run poll loop.
pub static POLL_CHECKS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "taggart_poll_checks",
            "Number of run status checks per classification",
        )
        .buckets(vec![1.0, 2.0, 5.0, 10.0, 20.0, 30.0]),
    )
    .unwrap()
});

/// Register core metrics with a registry.
pub fn register_core_metrics(registry: &prometheus::Registry) {
    // Ignore AlreadyReg errors so tests can build multiple registries.
    let _ = registry.register(Box::new(CLASSIFICATIONS_TOTAL.clone()));
    let _ = registry.register(Box::new(CLASSIFY_DURATION.clone()));
    let _ = registry.register(Box::new(POLL_CHECKS.clone()));
}
