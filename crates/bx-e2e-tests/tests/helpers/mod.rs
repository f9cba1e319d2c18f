//! Shared test harness for E2E integration tests.
//!
//! Drives the real Axum router over `tower::oneshot`, exercising the
//! full pipeline (grammar → token scan → oracle → catalog search)
//! without a network listener or a database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bx_api::extract::{ExtractionOracle, StaticOracle};
use bx_api::routes::build_router;
use bx_api::state::AppState;

/// End-to-end harness: in-memory catalog behind the real HTTP surface.
pub struct TestHarness {
    pub router: Router,
}

impl TestHarness {
    /// Harness with the sample catalog and no extraction oracle.
    pub fn with_sample_data() -> Self {
        Self {
            router: build_router(AppState::with_sample_data()),
        }
    }

    /// Harness with the sample catalog and a fixed-answer oracle.
    pub fn with_static_oracle(payload: &str) -> Self {
        let oracle: Arc<dyn ExtractionOracle> =
            Arc::new(StaticOracle::from_json(payload).expect("valid oracle payload"));
        let mut state = AppState::with_sample_data();
        state.oracle = oracle;
        Self {
            router: build_router(state),
        }
    }

    /// POST /api/v1/search with the given query text.
    /// Returns (HTTP status code, response JSON body).
    pub async fn search(&self, query: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "query": query });
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/api/v1/search")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    /// Raw request passthrough, for malformed-input tests.
    pub async fn send(&self, request: Request<Body>) -> StatusCode {
        self.router.clone().oneshot(request).await.unwrap().status()
    }
}
