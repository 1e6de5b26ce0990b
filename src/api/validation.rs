//! Platform limits and ad-hoc content validation endpoints.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use super::extract::ApiJson;
use crate::metrics::ValidationMetrics;
use crate::platform::{
    get_overall_validation, validate_all_platform_content, CampaignDrafts, OverallValidation,
    Platform, PlatformLimits, ValidationResult, PLATFORM_LIMITS,
};

#[derive(Debug, Serialize)]
pub struct PlatformsResponse {
    pub platforms: Vec<&'static PlatformLimits>,
}

#[derive(Debug, Serialize)]
pub struct ContentValidationResponse {
    pub platforms: BTreeMap<Platform, ValidationResult>,
    pub overall: OverallValidation,
}

/// GET /api/v1/platforms - Limits used by the validators
pub async fn list_platforms() -> Json<PlatformsResponse> {
    Json(PlatformsResponse {
        platforms: PLATFORM_LIMITS.iter().collect(),
    })
}

/// POST /api/v1/content/validate - Validate caller-supplied drafts
#[tracing::instrument(name = "http.validate_content", skip(drafts))]
pub async fn validate_content(
    ApiJson(drafts): ApiJson<CampaignDrafts>,
) -> Json<ContentValidationResponse> {
    let platforms = validate_all_platform_content(&drafts);
    ValidationMetrics::record_all(&platforms);
    let overall = get_overall_validation(&platforms);

    Json(ContentValidationResponse { platforms, overall })
}
