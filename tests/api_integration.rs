//! HTTP integration tests
//!
//! Drives the full router (auth, metrics middleware, handlers) in-process
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use campaign_copy_service::config::Settings;
use campaign_copy_service::server::{create_app, AppState};
use campaign_copy_service::template::TemplateStore;

const API_KEY: &str = "test-key";

fn app_with_key(key: Option<&str>) -> Router {
    let mut settings = Settings::default();
    settings.api.key = key.map(str::to_string);
    let store = Arc::new(TemplateStore::with_builtin());
    create_app(AppState::with_store(settings, store))
}

fn app() -> Router {
    app_with_key(None)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

// =============================================================================
// Health & Auth Tests
// =============================================================================

mod health_and_auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_template_count() {
        let (status, body) = send(app(), request(Method::GET, "/health", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["templates"], 12);
    }

    #[tokio::test]
    async fn test_health_skips_api_key() {
        let (status, _) = send(
            app_with_key(Some(API_KEY)),
            request(Method::GET, "/health", None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_api_key_rejected() {
        let (status, body) = send(
            app_with_key(Some(API_KEY)),
            request(Method::GET, "/api/v1/templates", None),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert!(body["error"]["message"].as_str().unwrap().contains("Missing X-API-Key header"));
    }

    #[tokio::test]
    async fn test_wrong_api_key_rejected() {
        let req = Request::builder()
            .uri("/api/v1/platforms")
            .header("X-API-Key", "nope")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app_with_key(Some(API_KEY)), req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert!(body["error"]["message"].as_str().unwrap().contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_valid_api_key_accepted() {
        let req = Request::builder()
            .uri("/api/v1/platforms")
            .header("X-API-Key", API_KEY)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app_with_key(Some(API_KEY)), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["platforms"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_exposes_prefix() {
        let response = app()
            .oneshot(request(Method::GET, "/metrics", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("campaign_templates_total"));
    }
}

// =============================================================================
// Template CRUD Tests
// =============================================================================

mod template_crud_tests {
    use super::*;

    fn flash_sale() -> Value {
        json!({
            "id": "flash-sale",
            "name": "Flash Sale",
            "campaignType": "flash_sale",
            "productTypes": ["preset_pack"],
            "twitter": {"tweet": "{{discount}}% off for 24h: {{url}}", "hashtags": ["sale"]},
            "variables": [
                {"key": "{{discount}}", "label": "Discount", "type": "discount", "required": true, "defaultValue": "30"},
                {"key": "{{url}}", "label": "Store URL", "type": "url", "required": true}
            ]
        })
    }

    #[tokio::test]
    async fn test_list_templates() {
        let (status, body) = send(app(), request(Method::GET, "/api/v1/templates", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 12);
        assert_eq!(body["templates"][0]["id"], "anniversary-birthday");
    }

    #[tokio::test]
    async fn test_list_templates_filtered() {
        let (status, body) = send(
            app(),
            request(Method::GET, "/api/v1/templates?campaignType=course_milestone", None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        let ids: Vec<_> = body["templates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["certificate-earned", "course-completion", "module-completion"]);
    }

    #[tokio::test]
    async fn test_get_unknown_template() {
        let (status, body) =
            send(app(), request(Method::GET, "/api/v1/templates/nope", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_then_conflict() {
        let app = app();

        let (status, body) = send(
            app.clone(),
            request(Method::POST, "/api/v1/templates", Some(flash_sale())),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "flash-sale");

        let (status, body) = send(
            app.clone(),
            request(Method::POST, "/api/v1/templates", Some(flash_sale())),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "TEMPLATE_EXISTS");

        let (_, body) = send(app, request(Method::GET, "/api/v1/templates", None)).await;
        assert_eq!(body["total"], 13);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_id() {
        let mut template = flash_sale();
        template["id"] = json!("bad id!");

        let (status, body) = send(
            app(),
            request(Method::POST, "/api/v1/templates", Some(template)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ID");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let (status, body) = send(
            app(),
            request(
                Method::POST,
                "/api/v1/templates",
                Some(json!({"id": "no-name", "twitter": {"tweet": "hi"}})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_non_json_body() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/templates")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_clears_and_replaces_sections() {
        let (status, body) = send(
            app(),
            request(
                Method::PUT,
                "/api/v1/templates/sample-pack-launch",
                Some(json!({
                    "recommendedTiming": null,
                    "facebook": null,
                    "twitter": {"tweet": "{{productName}} is out", "hashtags": []}
                })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("recommendedTiming").map_or(true, Value::is_null));
        assert!(body.get("facebook").map_or(true, Value::is_null));
        assert_eq!(body["twitter"]["tweet"], "{{productName}} is out");
        assert!(body["email"]["subject"].is_string());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = app();

        let (status, body) = send(
            app.clone(),
            request(
                Method::PUT,
                "/api/v1/templates/black-friday",
                Some(json!({"name": "Cyber Monday"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Cyber Monday");
        assert_eq!(body["id"], "black-friday");

        let (status, _) = send(
            app.clone(),
            request(Method::DELETE, "/api/v1/templates/black-friday", None),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            app,
            request(Method::GET, "/api/v1/templates/black-friday", None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Render & Validation Tests
// =============================================================================

mod render_and_validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_render_reports_missing() {
        let (status, body) = send(
            app(),
            request(
                Method::POST,
                "/api/v1/templates/black-friday/render",
                Some(json!({"values": {"endDate": "2025-11-30"}})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["templateId"], "black-friday");
        let missing: Vec<_> = body["missing"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(missing, vec!["{{discountPercent}}", "{{discountCode}}", "{{storeUrl}}"]);

        let tweet = body["content"]["twitter"]["tweet"].as_str().unwrap();
        assert!(tweet.contains("Ends 2025-11-30"));
        assert!(tweet.contains("50% off"));
    }

    #[tokio::test]
    async fn test_preview_uses_labels() {
        let (status, body) = send(
            app(),
            request(Method::POST, "/api/v1/templates/black-friday/preview", Some(json!({}))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let tweet = body["twitter"]["tweet"].as_str().unwrap();
        assert!(tweet.contains("[Store URL]"));
    }

    #[tokio::test]
    async fn test_variables_validate_reports_type_errors() {
        let (status, body) = send(
            app(),
            request(
                Method::POST,
                "/api/v1/templates/black-friday/variables/validate",
                Some(json!({"values": {
                    "discountPercent": "150",
                    "discountCode": "BF",
                    "endDate": "2025-11-30",
                    "storeUrl": "https://store.example"
                }})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["missing"].as_array().unwrap().len(), 0);
        assert_eq!(body["typeErrors"][0]["key"], "{{discountPercent}}");
    }

    #[tokio::test]
    async fn test_validate_template_over_limit() {
        let (status, body) = send(
            app(),
            request(
                Method::POST,
                "/api/v1/templates/sample-pack-launch/validate",
                Some(json!({"values": {
                    "productName": "X".repeat(300),
                    "productUrl": "https://store.example/pack",
                    "creatorName": "Sam"
                }})),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"]["valid"], false);
        assert_eq!(body["platforms"]["twitter"]["valid"], false);
        assert_eq!(body["platforms"]["email"]["valid"], false);
        assert_eq!(body["platforms"]["linkedin"]["valid"], true);
        assert!(body["overall"]["totalErrors"].as_u64().unwrap() >= 2);
    }

    #[tokio::test]
    async fn test_validate_content_drafts() {
        let (status, body) = send(
            app(),
            request(
                Method::POST,
                "/api/v1/content/validate",
                Some(json!({
                    "twitter": {"tweet": "a".repeat(290)},
                    "instagram": {"caption": "hi", "hashtags": vec!["tag"; 31]},
                    "email": {"subject": "A".repeat(60), "body": "ok"}
                })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"]["valid"], false);
        assert_eq!(body["platforms"]["twitter"]["valid"], false);
        assert_eq!(body["platforms"]["instagram"]["valid"], false);
        assert_eq!(body["platforms"]["email"]["valid"], true);
        assert!(!body["platforms"]["email"]["warnings"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(body["platforms"].as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_render_unknown_template() {
        let (status, _) = send(
            app(),
            request(Method::POST, "/api/v1/templates/ghost/render", Some(json!({}))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
