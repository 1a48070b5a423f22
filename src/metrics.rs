use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder and describe all metrics
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("ltl_quotes_total", "Total number of successful freight quotes");
    describe_counter!("ltl_quote_errors_total", "Total number of rejected quote requests");
    describe_histogram!(
        "ltl_chargeable_weight_kg",
        "Chargeable weight of quoted shipments in kilograms"
    );
    describe_histogram!("ltl_quote_duration_seconds", "Quote computation time in seconds");
    describe_gauge!("ltl_quote_info", "Service version information");

    gauge!("ltl_quote_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a successful quote
pub fn record_quote(origin: &str, destination: &str, chargeable_weight_kg: f64) {
    counter!(
        "ltl_quotes_total",
        "origin" => origin.to_string(),
        "destination" => destination.to_string(),
    )
    .increment(1);

    histogram!(
        "ltl_chargeable_weight_kg",
        "destination" => destination.to_string(),
    )
    .record(chargeable_weight_kg);
}

/// Record a rejected quote
pub fn record_error(error_type: &str) {
    counter!("ltl_quote_errors_total", "error_type" => error_type.to_string()).increment(1);
}

/// Record quote computation time
pub fn record_duration(duration: Duration) {
    histogram!("ltl_quote_duration_seconds").record(duration.as_secs_f64());
}
