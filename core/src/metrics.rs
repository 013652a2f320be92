use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

/// Crate-owned registry. An embedding service can gather from it; the
/// library itself never exports anything.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static REPORTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("ftracker_reports_total", "Training reports built, by activity type"),
        &["training"],
    )
    .unwrap();
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

static UNKNOWN_TRAINING_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    let counter = IntCounter::new(
        "ftracker_unknown_training_total",
        "Report requests with a label missing from the registry",
    )
    .unwrap();
    REGISTRY.register(Box::new(counter.clone())).unwrap();
    counter
});

pub fn reports_total(training: &str) -> IntCounter {
    REPORTS_TOTAL.with_label_values(&[training])
}

pub fn unknown_training_total() -> IntCounter {
    UNKNOWN_TRAINING_TOTAL.clone()
}
