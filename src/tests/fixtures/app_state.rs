use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;

use crate::modules::posts::adapters::outbound::posts_in_memory::InMemoryPosts;
use crate::shell::state::AppState;

pub fn make_test_state() -> (AppState, Arc<InMemoryPosts>) {
    let posts = Arc::new(InMemoryPosts::new());
    (AppState::new(posts.clone()), posts)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
