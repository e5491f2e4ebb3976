use async_trait::async_trait;

use crate::modules::posts::core::errors::PostStoreError;
use crate::modules::posts::core::post::{Post, PostDraft};

/// Storage port used by the inbound adapters. Each call is atomic on its own;
/// there is no transaction spanning several calls.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, draft: PostDraft) -> Post;

    async fn list(&self) -> Vec<Post>;

    async fn get_by_id(&self, id: &str) -> Result<Post, PostStoreError>;

    async fn replace_by_id(&self, id: &str, draft: PostDraft) -> Result<Post, PostStoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<String, PostStoreError>;
}
