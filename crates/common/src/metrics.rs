use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    // Query metrics
    pub static ref QUERY_COUNTER: CounterVec = register_counter_vec!(
        "catalog_queries_total",
        "Total number of queries processed",
        &["query_type", "status"]
    )
    .expect("metric cannot be created");

    pub static ref QUERY_DURATION: HistogramVec = register_histogram_vec!(
        "catalog_query_duration_seconds",
        "Query processing duration in seconds",
        &["query_type"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("metric cannot be created");

    // Cache metrics
    pub static ref CACHE_HIT_COUNTER: CounterVec = register_counter_vec!(
        "catalog_cache_requests_total",
        "Total number of cache requests",
        &["cache_type", "status"]
    )
    .expect("metric cannot be created");

    pub static ref CACHE_WRITE_FAILURES: CounterVec = register_counter_vec!(
        "catalog_cache_write_failures_total",
        "Total number of cache writes that failed and were skipped",
        &["cache_type"]
    )
    .expect("metric cannot be created");

    // Storage metrics
    pub static ref STORAGE_READS: CounterVec = register_counter_vec!(
        "catalog_storage_reads_total",
        "Total number of storage reads",
        &["entity", "status"]
    )
    .expect("metric cannot be created");
}

/// Get all metrics in Prometheus text format
pub fn gather_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record a query outcome. `status` is a short label such as "success" or "not_found".
pub fn record_query(query_type: &str, status: &str, duration_secs: f64) {
    QUERY_COUNTER
        .with_label_values(&[query_type, status])
        .inc();
    QUERY_DURATION
        .with_label_values(&[query_type])
        .observe(duration_secs);
}

pub fn record_cache_request(cache_type: &str, hit: bool) {
    let status = if hit { "hit" } else { "miss" };
    CACHE_HIT_COUNTER
        .with_label_values(&[cache_type, status])
        .inc();
}

pub fn record_cache_write_failure(cache_type: &str) {
    CACHE_WRITE_FAILURES.with_label_values(&[cache_type]).inc();
}

pub fn record_storage_read(entity: &str, found: bool) {
    let status = if found { "found" } else { "not_found" };
    STORAGE_READS.with_label_values(&[entity, status]).inc();
}
