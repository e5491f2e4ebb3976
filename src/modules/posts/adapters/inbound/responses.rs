use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::modules::posts::adapters::inbound::validation::FieldError;
use crate::modules::posts::core::errors::PostStoreError;

pub const POST_NOT_FOUND: &str = "Post not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid post body")]
    Validation(Vec<FieldError>),

    #[error("Post not found")]
    NotFound,
}

impl From<PostStoreError> for ApiError {
    fn from(err: PostStoreError) -> Self {
        match err {
            PostStoreError::NotFound { .. } => ApiError::NotFound,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    errors: Vec<T>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody { errors }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    errors: vec![json!({ "message": POST_NOT_FOUND })],
                }),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    pub fn for_id(id: &str) -> Self {
        Self {
            message: format!("Post with id {id} has been successfully deleted"),
        }
    }
}
