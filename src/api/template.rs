//! Template CRUD, render and validation endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::extract::ApiJson;
use crate::error::Result;
use crate::metrics::{RenderMetrics, ValidationMetrics};
use crate::platform::{
    get_overall_validation, validate_all_platform_content, CampaignDrafts, OverallValidation,
    Platform, ValidationResult,
};
use crate::server::AppState;
use crate::template::{
    check_variable_types, validate_variables, CampaignContent, CampaignType,
    MarketingCampaignTemplate, RenderedCampaign, TemplateListResponse, TemplateVariable,
    UpdateTemplateRequest, VariableIssue, VariableValues,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplatesQuery {
    pub campaign_type: Option<CampaignType>,
    pub product_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub values: VariableValues,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesValidationResponse {
    pub valid: bool,
    pub missing: Vec<TemplateVariable>,
    pub type_errors: Vec<VariableIssue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateValidationResponse {
    pub template_id: String,
    pub content: CampaignContent,
    pub missing: Vec<TemplateVariable>,
    pub unresolved: Vec<String>,
    pub platforms: BTreeMap<Platform, ValidationResult>,
    pub overall: OverallValidation,
}

/// POST /api/v1/templates - Create a new template
#[tracing::instrument(
    name = "http.create_template",
    skip(state, template),
    fields(template_id = %template.id)
)]
pub async fn create_template(
    State(state): State<AppState>,
    ApiJson(mut template): ApiJson<MarketingCampaignTemplate>,
) -> Result<(StatusCode, Json<MarketingCampaignTemplate>)> {
    let now = Utc::now();
    template.created_at = now;
    template.updated_at = now;

    let created = state.template_store.create(template)?;
    RenderMetrics::set_template_count(state.template_store.count());
    tracing::info!("Template created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/templates - List templates, optionally filtered
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Json<TemplateListResponse> {
    let templates = state
        .template_store
        .list_filtered(query.campaign_type, query.product_type.as_deref());
    let total = templates.len();

    Json(TemplateListResponse { templates, total })
}

/// GET /api/v1/templates/{id} - Get a specific template
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MarketingCampaignTemplate>> {
    Ok(Json(state.template_store.get(&id)?))
}

/// PUT /api/v1/templates/{id} - Update an existing template
#[tracing::instrument(name = "http.update_template", skip(state, request))]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTemplateRequest>,
) -> Result<Json<MarketingCampaignTemplate>> {
    Ok(Json(state.template_store.update(&id, request)?))
}

/// DELETE /api/v1/templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.template_store.delete(&id)?;
    RenderMetrics::set_template_count(state.template_store.count());
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/templates/{id}/render - Fill in variables
#[tracing::instrument(name = "http.render_template", skip(state, request))]
pub async fn render_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<RenderRequest>,
) -> Result<Json<RenderedCampaign>> {
    let rendered = state.template_store.render(&id, &request.values)?;
    RenderMetrics::record_render(&id, rendered.missing.len());

    if !rendered.unresolved.is_empty() {
        tracing::debug!(unresolved = ?rendered.unresolved, "Template has undeclared tokens");
    }

    Ok(Json(rendered))
}

/// POST /api/v1/templates/{id}/preview - Fill in variables, `[Label]` for gaps
#[tracing::instrument(name = "http.preview_template", skip(state, request))]
pub async fn preview_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<RenderRequest>,
) -> Result<Json<CampaignContent>> {
    let preview = state.template_store.preview(&id, &request.values)?;
    RenderMetrics::record_preview();
    Ok(Json(preview))
}

/// POST /api/v1/templates/{id}/variables/validate - Check supplied values
#[tracing::instrument(name = "http.validate_template_variables", skip(state, request))]
pub async fn validate_template_variables(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<RenderRequest>,
) -> Result<Json<VariablesValidationResponse>> {
    let template = state.template_store.get(&id)?;
    let validation = validate_variables(&template.variables, &request.values);

    Ok(Json(VariablesValidationResponse {
        valid: validation.valid,
        missing: validation.missing,
        type_errors: check_variable_types(&template.variables, &request.values),
    }))
}

/// POST /api/v1/templates/{id}/validate - Render, then validate every platform
#[tracing::instrument(name = "http.validate_template", skip(state, request))]
pub async fn validate_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<RenderRequest>,
) -> Result<Json<TemplateValidationResponse>> {
    let rendered = state.template_store.render(&id, &request.values)?;
    RenderMetrics::record_render(&id, rendered.missing.len());

    let platforms = validate_all_platform_content(&CampaignDrafts::from(&rendered.content));
    ValidationMetrics::record_all(&platforms);
    let overall = get_overall_validation(&platforms);

    tracing::info!(
        valid = overall.valid,
        errors = overall.total_errors,
        warnings = overall.total_warnings,
        missing = rendered.missing.len(),
        "Template validated"
    );

    Ok(Json(TemplateValidationResponse {
        template_id: rendered.template_id,
        content: rendered.content,
        missing: rendered.missing,
        unresolved: rendered.unresolved,
        platforms,
        overall,
    }))
}
