use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("reno_quotations_total", "Quotations calculated");
    describe_counter!("reno_comparisons_total", "Quotation comparisons created");
    describe_counter!("reno_style_reports_total", "Style test reports produced");
    describe_counter!("reno_floorplan_analyses_total", "Floorplan analyses produced");
    describe_counter!(
        "reno_advisor_calls_total",
        "AI advisor calls by operation and outcome"
    );
    describe_counter!("reno_validation_errors_total", "Rejected requests by kind");
    describe_gauge!("reno_quote_info", "Service version information");

    gauge!("reno_quote_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a calculated quotation
pub fn record_quotation(style: &str) {
    counter!("reno_quotations_total", "style" => style.to_string()).increment(1);
}

/// Record a stored comparison
pub fn record_comparison(quotation_count: usize) {
    counter!(
        "reno_comparisons_total",
        "size" => quotation_count.to_string(),
    )
    .increment(1);
}

/// Record a style report, labelled by the engine that produced it
pub fn record_style_report(source: &str) {
    counter!("reno_style_reports_total", "source" => source.to_string()).increment(1);
}

/// Record a floorplan analysis, labelled by the engine that produced it
pub fn record_floorplan_analysis(source: &str) {
    counter!("reno_floorplan_analyses_total", "source" => source.to_string()).increment(1);
}

/// Record an advisor call outcome ("success" or an error kind)
pub fn record_advisor_outcome(operation: &str, outcome: &str) {
    counter!(
        "reno_advisor_calls_total",
        "operation" => operation.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

/// Record a request rejected by validation
pub fn record_validation_error(kind: &str) {
    counter!("reno_validation_errors_total", "kind" => kind.to_string()).increment(1);
}
