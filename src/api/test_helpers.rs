use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
};
use std::sync::Arc;
use tempfile::TempDir;

use crate::store::TemplateStore;

/// A store rooted in a fresh temporary directory. Keep the `TempDir` alive for
/// as long as the store is used.
pub fn setup_test_store() -> (TempDir, Arc<TemplateStore>) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = Arc::new(TemplateStore::new(dir.path().join("html_templates")));
    (dir, store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_body(method: Method, uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

pub async fn read_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json<T>(response: Response) -> T
where
    T: serde::de::DeserializeOwned,
{
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
