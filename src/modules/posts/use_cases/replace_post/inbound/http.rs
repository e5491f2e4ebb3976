use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::modules::posts::adapters::inbound::responses::ApiError;
use crate::modules::posts::adapters::inbound::validation::{body_or_null, validate_post_body};
use crate::modules::posts::core::post::Post;
use crate::shell::state::AppState;

// Validation runs before the lookup, so a bad body on an unknown id is a 422.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let draft = validate_post_body(&body_or_null(body)).map_err(ApiError::Validation)?;
    let post = state.posts.replace_by_id(&id, draft).await?;
    Ok(Json(post))
}
