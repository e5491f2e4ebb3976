use std::sync::Arc;

use crate::modules::posts::adapters::outbound::posts_in_memory::InMemoryPosts;
use crate::modules::posts::core::ports::PostRepository;

/// Shared by every handler. Each state built with `in_memory` owns a fresh,
/// empty post collection; nothing is shared at process scope.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPosts::new()))
    }
}
