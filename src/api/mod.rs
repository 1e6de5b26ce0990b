//! API layer - HTTP endpoint handlers organized by domain.

mod extract;
mod health;
mod metrics;
mod routes;
mod template;
mod validation;

pub use extract::ApiJson;
pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, get_template, list_templates, preview_template,
    render_template, update_template, validate_template, validate_template_variables,
    ListTemplatesQuery, RenderRequest, TemplateValidationResponse, VariablesValidationResponse,
};
pub use validation::{list_platforms, validate_content, ContentValidationResponse, PlatformsResponse};
