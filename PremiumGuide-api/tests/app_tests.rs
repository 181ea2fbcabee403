use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use premium_guide_api::api::create_application;
use premium_guide_api::config::ServerConfig;
use premium_guide_domain::config::ArtifactConfig;
use premium_guide_domain::services::{create_default_premium_service, PricingPolicy, PremiumServiceTrait};
use premium_guide_domain::testing::create_mock_premium_service;

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

/// App whose model always returns `model_output` USD against an average of `mean_charges` USD
fn test_app(model_output: f64, mean_charges: f64) -> Router {
    initialize();
    create_application(
        Arc::new(create_mock_premium_service(model_output, mean_charges)),
        &ServerConfig::default(),
    )
}

// Helper function to get body bytes from a response
async fn get_body_bytes(response: axum::response::Response) -> Vec<u8> {
    let body = response.into_body();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    bytes.to_vec()
}

async fn get_body_text(response: axum::response::Response) -> String {
    String::from_utf8(get_body_bytes(response).await).unwrap()
}

async fn get_body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&get_body_bytes(response).await).unwrap()
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(5000.0, 5000.0);

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = get_body_json(response).await;
    assert_eq!(health["status"], "ok");
    assert!(health["version"].is_string());
    assert_eq!(health["environment"], "development");
    assert_eq!(health["components"]["model"]["status"], "ok");
    assert_eq!(health["components"]["dataset"]["status"], "ok");
}

#[tokio::test]
async fn test_health_check_reports_empty_dataset() {
    initialize();
    let service = premium_guide_domain::services::PremiumService::new(
        premium_guide_domain::testing::FixedModel::new(5000.0),
        premium_guide_domain::testing::InMemoryChargesDataset::from_charges(&[]),
        PricingPolicy::default(),
    );
    let app = create_application(Arc::new(service), &ServerConfig::default());

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let health = get_body_json(response).await;
    assert_eq!(health["status"], "degraded");
    assert_eq!(health["components"]["dataset"]["status"], "degraded");
}

#[tokio::test]
async fn test_form_page_renders() {
    let app = test_app(5000.0, 5000.0);

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with(mime::TEXT_HTML.as_ref()));

    let page = get_body_text(response).await;
    assert!(page.contains("Health Insurance Premium Predictor"));
    assert!(page.contains("Calculated BMI:</strong> 24.22"));
    assert!(!page.contains("per year"));
}

#[tokio::test]
async fn test_form_predict_and_change_inputs() {
    let app = test_app(5000.0, 4000.0);

    let response = app
        .clone()
        .oneshot(form_request("age=30&sex=Male&children=0&smoker=No&action=predict"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = get_body_text(response).await;
    assert!(page.contains("<h2 style=\"color:red;\">₹415,000 per year</h2>"));
    assert!(page.contains("Your premium is higher than the dataset average of ₹332,000."));

    // Changing an input drops the stale prediction
    let response = app
        .clone()
        .oneshot(form_request("smoker=Yes"))
        .await
        .unwrap();
    let page = get_body_text(response).await;
    assert!(!page.contains("per year"));
    assert!(page.contains("Smoking increases premium by ~60-70% on average."));
}

#[tokio::test]
async fn test_form_switch_to_known_bmi_keeps_prediction() {
    let app = test_app(5000.0, 5000.0);

    let response = app.clone().oneshot(form_request("action=predict")).await.unwrap();
    assert!(get_body_text(response).await.contains("per year"));

    let response = app.clone().oneshot(form_request("bmi_mode=known")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = get_body_text(response).await;
    assert!(page.contains("name=\"bmi\""));
    assert!(page.contains("value=\"24.22\""));
    assert!(page.contains("<td>BMI</td><td>24.22</td>"));
    assert!(page.contains("₹415,000 per year"));
}

#[tokio::test]
async fn test_form_clamps_out_of_range_values() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .clone()
        .oneshot(form_request("age=250&children=-1&height_cm=300&weight_kg="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/api/v1/session")).await.unwrap();
    let view = get_body_json(response).await;
    assert_eq!(view["input"]["age"], 200);
    assert_eq!(view["input"]["children"], 0);
    assert_eq!(view["input"]["height_cm"], 250);
    assert_eq!(view["input"]["weight_kg"], 70);
}

#[tokio::test]
async fn test_json_session_flow() {
    let app = test_app(10.0, 5000.0);

    let response = app.clone().oneshot(empty_request("GET", "/api/v1/session")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = get_body_json(response).await;
    assert!(view.get("prediction").is_none());
    assert_eq!(view["bmi_category"], "Normal");

    let profile = json!({
        "age": 45,
        "sex": "Female",
        "children": 2,
        "smoker": "No",
        "bmi_mode": "known",
        "bmi": 17.0
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/v1/session/profile", profile))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = get_body_json(response).await;
    assert_eq!(view["bmi_category"], "Underweight");
    assert_eq!(
        view["health_suggestion"],
        "Focus on nutrient-dense meals, protein supplements, and regular checkups to prevent malnutrition."
    );

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/v1/session/predict"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = get_body_json(response).await;
    assert_eq!(view["prediction"]["premium"], 2000.0);
    assert_eq!(view["prediction"]["floored"], true);
    assert_eq!(view["comparison"]["tier"], "favorable");
    assert_eq!(view["insights"]["dataset_comparison"]["level"], "success");

    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/v1/session/reset"))
        .await
        .unwrap();
    let view = get_body_json(response).await;
    assert!(view.get("prediction").is_none());
    assert_eq!(view["input"]["age"], 30);
}

#[tokio::test]
async fn test_profile_update_rejects_out_of_range() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .oneshot(json_request("PUT", "/api/v1/session/profile", json!({ "age": 201 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = get_body_json(response).await;
    assert_eq!(error["error"], "validation_error");
    assert!(error["message"].as_str().unwrap_or_default().contains("Age must be between 0 and 200"));
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/premium/estimate", json!({ "smoker": "Yes" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let view = get_body_json(response).await;
    assert_eq!(view["prediction"]["premium"], 415000.0);
    assert_eq!(view["comparison"]["summary"], "0.0% higher");
    assert_eq!(view["comparison"]["tier"], "neutral");
    assert_eq!(view["insights"]["smoker_insight"], "Smoking increases premium by ~60-70% on average.");

    // The shared session is untouched
    let response = app.oneshot(empty_request("GET", "/api/v1/session")).await.unwrap();
    let view = get_body_json(response).await;
    assert!(view.get("prediction").is_none());
}

#[tokio::test]
async fn test_estimate_rejects_invalid_bmi() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/premium/estimate",
            json!({ "bmi_mode": "known", "bmi": 5.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bmi_endpoint() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/bmi?height_cm=170&weight_kg=70"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bmi = get_body_json(response).await;
    assert_eq!(bmi["bmi"], 24.22);
    assert_eq!(bmi["category"], "Normal");

    let response = app
        .oneshot(empty_request("GET", "/api/v1/bmi?height_cm=170&weight_kg=20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_documentation_available() {
    let app = test_app(5000.0, 5000.0);

    let response = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let openapi = get_body_json(response).await;
    assert_eq!(openapi["info"]["title"], "PremiumGuide API");
    assert!(openapi["paths"]["/api/v1/premium/estimate"].is_object());
}

#[test]
fn test_sample_artifacts_load() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    let service = create_default_premium_service(&ArtifactConfig::in_dir(data_dir), PricingPolicy::default())
        .expect("sample artifacts should load");

    assert!(service.dataset_rows() > 0);
    assert!(service.average_premium() > 0.0);
}
