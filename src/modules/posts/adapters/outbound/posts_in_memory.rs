// Process local post repository.
//
// Wraps a `PostStore` in a mutex so every operation runs to completion before
// the next one starts, whatever the number of runtime workers.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::posts::core::errors::PostStoreError;
use crate::modules::posts::core::ports::PostRepository;
use crate::modules::posts::core::post::{Post, PostDraft};
use crate::modules::posts::core::store::PostStore;

#[derive(Default)]
pub struct InMemoryPosts {
    store: Mutex<PostStore>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create(&self, draft: PostDraft) -> Post {
        self.store.lock().await.create(draft)
    }

    async fn list(&self) -> Vec<Post> {
        self.store.lock().await.list()
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, PostStoreError> {
        self.store.lock().await.get_by_id(id)
    }

    async fn replace_by_id(&self, id: &str, draft: PostDraft) -> Result<Post, PostStoreError> {
        self.store.lock().await.replace_by_id(id, draft)
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, PostStoreError> {
        self.store.lock().await.delete_by_id(id)
    }
}
