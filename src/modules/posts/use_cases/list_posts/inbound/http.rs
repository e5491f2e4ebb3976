use axum::{Json, extract::State};

use crate::modules::posts::core::post::Post;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}
