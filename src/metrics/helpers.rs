//! Metrics helper structs for convenient metric recording

use std::collections::BTreeMap;

use prometheus::{Encoder, TextEncoder};

use super::{
    HTTP_REQUESTS_TOTAL, HTTP_REQUEST_LATENCY, RENDERS_INCOMPLETE_TOTAL, TEMPLATES_TOTAL,
    TEMPLATE_RENDERS_TOTAL, VALIDATIONS_TOTAL, VALIDATION_ERRORS_TOTAL,
    VALIDATION_WARNINGS_TOTAL,
};
use crate::platform::{Platform, ValidationResult};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording template render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    pub fn set_template_count(count: usize) {
        TEMPLATES_TOTAL.set(count as i64);
    }

    pub fn record_render(template_id: &str, missing: usize) {
        TEMPLATE_RENDERS_TOTAL.with_label_values(&["render"]).inc();
        if missing > 0 {
            RENDERS_INCOMPLETE_TOTAL
                .with_label_values(&[template_id])
                .inc();
        }
    }

    pub fn record_preview() {
        TEMPLATE_RENDERS_TOTAL.with_label_values(&["preview"]).inc();
    }
}

/// Helper struct for recording validation metrics
pub struct ValidationMetrics;

impl ValidationMetrics {
    pub fn record(platform: Platform, result: &ValidationResult) {
        let outcome = if result.valid() { "valid" } else { "invalid" };
        VALIDATIONS_TOTAL
            .with_label_values(&[platform.as_str(), outcome])
            .inc();
        VALIDATION_ERRORS_TOTAL
            .with_label_values(&[platform.as_str()])
            .inc_by(result.errors().len() as u64);
        VALIDATION_WARNINGS_TOTAL
            .with_label_values(&[platform.as_str()])
            .inc_by(result.warnings().len() as u64);
    }

    pub fn record_all(results: &BTreeMap<Platform, ValidationResult>) {
        for (platform, result) in results {
            Self::record(*platform, result);
        }
    }
}

/// Helper struct for recording HTTP metrics
pub struct HttpMetrics;

impl HttpMetrics {
    pub fn record(method: &str, path: &str, status: u16, latency_secs: f64) {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&[method, path, &status.to_string()])
            .inc();
        HTTP_REQUEST_LATENCY
            .with_label_values(&[method, path])
            .observe(latency_secs);
    }
}
