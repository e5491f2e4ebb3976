use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::posts::adapters::inbound::responses::ApiError;
use crate::modules::posts::core::post::Post;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.get_by_id(&id).await?;
    Ok(Json(post))
}
