use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pathfinder_api::models::assessment::AssessmentResult;
use pathfinder_api::routes::build_router;
use pathfinder_api::state::AppState;
use pathfinder_api::store::{ResultStore, StoreError};

/// In-memory `ResultStore` so router tests run without PostgreSQL.
#[derive(Default)]
pub struct MemoryStore {
    results: Mutex<HashMap<String, AssessmentResult>>,
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn put(&self, result: &AssessmentResult) -> Result<(), StoreError> {
        self.results
            .lock()
            .unwrap()
            .insert(result.id.to_string(), result.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<AssessmentResult>, StoreError> {
        Ok(self.results.lock().unwrap().get(id).cloned())
    }
}

/// Builds the real application router over an in-memory store.
pub fn build_test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::default()),
    };
    build_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
