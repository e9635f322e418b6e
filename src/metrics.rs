use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::time::Duration;

use crate::pricing::OrderSummary;

/// Install the Prometheus recorder and describe the service's metrics
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("pricing_quotes_total", "Total number of order summaries computed");
    describe_histogram!("pricing_quote_total_amount", "Order total of computed summaries");
    describe_counter!(
        "pricing_region_fallback_total",
        "Regions priced with the fallback zone"
    );
    describe_histogram!(
        "pricing_request_duration_seconds",
        "Request duration in seconds"
    );
    describe_counter!("pricing_errors_total", "Total number of errors");
    describe_counter!("pricing_policy_reloads_total", "Pricing policy reload attempts");
    describe_gauge!(
        "storefront_pricing_info",
        "Service version and build information"
    );

    gauge!("storefront_pricing_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a computed order summary
pub fn record_quote(endpoint: &str, summary: &OrderSummary) {
    counter!(
        "pricing_quotes_total",
        "endpoint" => endpoint.to_string(),
        "zone" => summary.zone.as_str(),
        "free_delivery" => summary.is_free_delivery.to_string(),
    )
    .increment(1);

    histogram!("pricing_quote_total_amount", "zone" => summary.zone.as_str())
        .record(decimal_to_f64(summary.total_amount));
}

/// Record a region that no table entry matched
pub fn record_region_fallback(endpoint: &str) {
    counter!("pricing_region_fallback_total", "endpoint" => endpoint.to_string()).increment(1);
}

/// Record request duration
pub fn record_duration(endpoint: &str, duration: Duration) {
    histogram!(
        "pricing_request_duration_seconds",
        "endpoint" => endpoint.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record an error
pub fn record_error(error_type: &str) {
    counter!("pricing_errors_total", "error_type" => error_type.to_string()).increment(1);
}

/// Record a policy reload
pub fn record_reload(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!("pricing_policy_reloads_total", "outcome" => outcome).increment(1);
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
