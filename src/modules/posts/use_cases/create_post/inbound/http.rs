use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde_json::Value;

use crate::modules::posts::adapters::inbound::responses::ApiError;
use crate::modules::posts::adapters::inbound::validation::{body_or_null, validate_post_body};
use crate::modules::posts::core::post::Post;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let draft = validate_post_body(&body_or_null(body)).map_err(ApiError::Validation)?;
    let post = state.posts.create(draft).await;
    Ok((StatusCode::CREATED, Json(post)))
}
