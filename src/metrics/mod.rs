//! Prometheus metrics for the campaign copy service.
//!
//! - Template catalog size
//! - Render and preview counts
//! - Validation outcomes, errors and warnings by platform
//! - HTTP request counts and latency

mod helpers;

pub use helpers::{encode_metrics, HttpMetrics, RenderMetrics, ValidationMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, HistogramVec,
    IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "campaign";

lazy_static! {
    // ============================================================================
    // Template Metrics
    // ============================================================================

    /// Number of templates currently in the store
    pub static ref TEMPLATES_TOTAL: IntGauge = register_int_gauge!(
        format!("{}_templates_total", METRIC_PREFIX),
        "Number of campaign templates in the store"
    ).unwrap();

    /// Templates rendered, by mode (render, preview)
    pub static ref TEMPLATE_RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_template_renders_total", METRIC_PREFIX),
        "Total template renders",
        &["mode"]
    ).unwrap();

    /// Renders that still had required variables unfilled
    pub static ref RENDERS_INCOMPLETE_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_incomplete_total", METRIC_PREFIX),
        "Renders with unfilled required variables",
        &["template"]
    ).unwrap();

    // ============================================================================
    // Validation Metrics
    // ============================================================================

    /// Platform validations by outcome (valid, invalid)
    pub static ref VALIDATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_validations_total", METRIC_PREFIX),
        "Total platform validations",
        &["platform", "outcome"]
    ).unwrap();

    /// Validation errors reported, by platform
    pub static ref VALIDATION_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_validation_errors_total", METRIC_PREFIX),
        "Total validation errors",
        &["platform"]
    ).unwrap();

    /// Validation warnings reported, by platform
    pub static ref VALIDATION_WARNINGS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_validation_warnings_total", METRIC_PREFIX),
        "Total validation warnings",
        &["platform"]
    ).unwrap();

    // ============================================================================
    // HTTP API Metrics
    // ============================================================================

    /// HTTP request counter by method and path
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_http_requests_total", METRIC_PREFIX),
        "Total HTTP requests",
        &["method", "path", "status"]
    ).unwrap();

    /// HTTP request latency
    pub static ref HTTP_REQUEST_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_http_request_latency_seconds", METRIC_PREFIX),
        "HTTP request latency in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5]
    ).unwrap();
}
