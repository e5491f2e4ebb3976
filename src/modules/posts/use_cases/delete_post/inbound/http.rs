use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::posts::adapters::inbound::responses::{ApiError, DeletedResponse};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.posts.delete_by_id(&id).await?;
    Ok(Json(DeletedResponse::for_id(&deleted)))
}
