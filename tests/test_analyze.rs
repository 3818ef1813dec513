use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use http_body_util::BodyExt;
use image::DynamicImage;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use labelens::error::ApiError;
use labelens::ocr::TextRecognizer;
use labelens::providers::{CompletionProvider, GroqProvider};
use labelens::server::{create_router, AppState};

/// Recognizer stub; /analyze never calls it but the state requires one
struct UnusedRecognizer;

#[async_trait]
impl TextRecognizer for UnusedRecognizer {
    async fn recognize(&self, _image: &DynamicImage) -> Result<String, ApiError> {
        panic!("recognizer should not be called by /analyze");
    }
}

/// Deterministic provider echoing the prompt length into its answer
struct StubCompletion;

#[async_trait]
impl CompletionProvider for StubCompletion {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        Ok(format!("analysis of {} prompt chars", prompt.len()))
    }
}

/// Provider that always fails, simulating an unreachable API
struct FailingCompletion;

#[async_trait]
impl CompletionProvider for FailingCompletion {
    fn provider_name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, ApiError> {
        Err(ApiError::Completion("connection refused".to_string()))
    }
}

fn app_with_completion(completion: Arc<dyn CompletionProvider>) -> axum::Router {
    create_router(AppState::new(Arc::new(UnusedRecognizer), completion))
}

fn analyze_request(ingredients: &str, product_type: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "ingredients": ingredients,
                "product_type": product_type,
            })
            .to_string(),
        ))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_analyze_relays_model_output() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/openai/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "choices": [{
                    "message": {
                        "content": "* 2. Beneficial Ingredients:\n    * Glycerin: hydrates skin"
                    }
                }]
            }"#,
        )
        .create_async()
        .await;

    let provider = GroqProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "llama-3.3-70b-versatile".to_string(),
    );
    let app = app_with_completion(Arc::new(provider));

    let response = app
        .oneshot(analyze_request("Water, Glycerin", "moisturizer"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let result = json["result"].as_str().unwrap();
    assert!(!result.is_empty());
    assert!(!result.starts_with("Analysis failed:"));
    assert!(result.contains("Glycerin"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_reports_provider_failure() {
    let app = app_with_completion(Arc::new(FailingCompletion));

    let response = app
        .oneshot(analyze_request("Water, Glycerin", "moisturizer"))
        .await
        .unwrap();

    // Failure stays in-band at HTTP 200
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let result = json["result"].as_str().unwrap();
    assert!(result.starts_with("Analysis failed: "));
    assert!(result.contains("connection refused"));
}

#[tokio::test]
async fn test_analyze_reports_unreachable_endpoint() {
    // Nothing listens on port 1; the request fails at connect time
    let provider = GroqProvider::with_base_url(
        "fake_api_key".to_string(),
        "http://127.0.0.1:1".to_string(),
        "llama-3.3-70b-versatile".to_string(),
    );
    let app = app_with_completion(Arc::new(provider));

    let response = app
        .oneshot(analyze_request("Water", "shampoo"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["result"].as_str().unwrap().starts_with("Analysis failed: "));
}

#[tokio::test]
async fn test_analyze_is_idempotent_with_deterministic_provider() {
    let app = app_with_completion(Arc::new(StubCompletion));

    let first = app
        .clone()
        .oneshot(analyze_request("Water, Glycerin", "moisturizer"))
        .await
        .unwrap();
    let second = app
        .oneshot(analyze_request("Water, Glycerin", "moisturizer"))
        .await
        .unwrap();

    let first_json = json_body(first).await;
    let second_json = json_body(second).await;
    assert_eq!(first_json["result"], second_json["result"]);
    assert!(!first_json["result"].as_str().unwrap().is_empty());
}
