//! Metrics collection for random-service.
//!
//! Provides the Prometheus recorder for request metrics plus a custom
//! counter for generated numbers.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounter, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static RANDOM_NUMBERS_GENERATED_TOTAL: OnceLock<IntCounter> = OnceLock::new();

/// Initialize metrics collection.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    let registry = Registry::new();

    let generated_counter = IntCounter::with_opts(Opts::new(
        "random_numbers_generated_total",
        "Total random numbers generated",
    ))
    .expect("Failed to create random_numbers_generated_total metric");

    registry
        .register(Box::new(generated_counter.clone()))
        .expect("Failed to register random_numbers_generated_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    RANDOM_NUMBERS_GENERATED_TOTAL
        .set(generated_counter)
        .expect("Failed to set random_numbers_generated_total");
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    // Append custom prometheus metrics
    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record one generated random number.
pub fn record_random_generated() {
    if let Some(counter) = RANDOM_NUMBERS_GENERATED_TOTAL.get() {
        counter.inc();
    }
}
