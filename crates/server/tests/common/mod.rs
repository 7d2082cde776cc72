//! Common test utilities for in-process API testing with mocks.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use taggart_core::testing::{MockAssistant, MockHelpdesk};
use taggart_core::{
    AssistantConfig, ClassifierConfig, Config, HelpdeskConfig, ServerConfig, TicketClassifier,
};
use taggart_server::api::create_router;
use taggart_server::state::AppState;

/// Test fixture for API testing with mock dependencies.
///
/// Provides an in-process router with fully controllable mocks for the
/// helpdesk and assistant collaborators; no network, no external
/// infrastructure.
pub struct TestFixture {
    /// The axum router under test
    pub router: Router,
    /// Mock helpdesk - configure tickets, inspect tag writes
    pub helpdesk: Arc<MockHelpdesk>,
    /// Mock assistant - script run statuses and the final verdict
    pub assistant: Arc<MockAssistant>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks and a zero-delay,
    /// 30-check poll policy.
    pub fn new() -> Self {
        Self::with_classifier_config(ClassifierConfig {
            poll_interval_ms: 0,
            max_checks: 30,
        })
    }

    /// Create a test fixture with a custom poll policy.
    pub fn with_classifier_config(classifier_config: ClassifierConfig) -> Self {
        let helpdesk = Arc::new(MockHelpdesk::new());
        let assistant = Arc::new(MockAssistant::new());

        let config = Config {
            server: ServerConfig::default(),
            helpdesk: HelpdeskConfig {
                domain: "test".to_string(),
                email: "test@example.com".to_string(),
                api_key: "test-token".to_string(),
                base_url: None,
            },
            assistant: AssistantConfig {
                api_key: "sk-test".to_string(),
                assistant_id: "asst_test".to_string(),
                base_url: None,
            },
            classifier: classifier_config.clone(),
        };

        let classifier = Arc::new(TicketClassifier::new(
            helpdesk.clone() as Arc<dyn taggart_core::HelpdeskClient>,
            assistant.clone() as Arc<dyn taggart_core::AssistantClient>,
            classifier_config,
        ));

        let state = Arc::new(AppState::new(config, classifier));
        let router = create_router(state);

        Self {
            router,
            helpdesk,
            assistant,
        }
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a POST request with raw string body (for malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
        };

        TestResponse { status, body }
    }
}
