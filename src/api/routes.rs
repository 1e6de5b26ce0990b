use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{api_key_auth, AppState};

use super::health::health;
use super::metrics::prometheus_metrics;
use super::template::{
    create_template, delete_template, get_template, list_templates, preview_template,
    render_template, update_template, validate_template, validate_template_variables,
};
use super::validation::{list_platforms, validate_content};

pub fn api_routes(state: AppState) -> Router<AppState> {
    let v1 = Router::new()
        // Platforms
        .route("/platforms", get(list_platforms))
        .route("/content/validate", post(validate_content))
        // Templates
        .route("/templates", get(list_templates).post(create_template))
        .route(
            "/templates/{id}",
            get(get_template).put(update_template).delete(delete_template),
        )
        .route("/templates/{id}/render", post(render_template))
        .route("/templates/{id}/preview", post(preview_template))
        .route(
            "/templates/{id}/variables/validate",
            post(validate_template_variables),
        )
        .route("/templates/{id}/validate", post(validate_template))
        .route_layer(middleware::from_fn_with_state(state, api_key_auth));

    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest("/api/v1", v1)
}
