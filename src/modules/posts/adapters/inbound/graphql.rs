use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::posts::adapters::inbound::responses::ApiError;
use crate::modules::posts::core::errors::PostStoreError;
use crate::modules::posts::core::post::{Post, PostDraft};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Post")]
pub struct GqlPost {
    pub id: ID,
    pub title: String,
    pub content: String,
}

impl From<Post> for GqlPost {
    fn from(p: Post) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            content: p.content,
        }
    }
}

fn not_found(e: PostStoreError) -> async_graphql::Error {
    async_graphql::Error::new(ApiError::from(e).to_string())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts, newest first.
    async fn posts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlPost>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.posts.list().await.into_iter().map(Into::into).collect())
    }

    async fn post(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let post = state.posts.get_by_id(&id).await.map_err(not_found)?;
        Ok(post.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_post(
        &self,
        context: &Context<'_>,
        title: String,
        content: String,
    ) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let post = state.posts.create(PostDraft::new(title, content)).await;
        Ok(post.into())
    }

    async fn replace_post(
        &self,
        context: &Context<'_>,
        id: ID,
        title: String,
        content: String,
    ) -> GqlResult<GqlPost> {
        let state = context.data_unchecked::<AppState>();
        let post = state
            .posts
            .replace_by_id(&id, PostDraft::new(title, content))
            .await
            .map_err(not_found)?;
        Ok(post.into())
    }

    /// Returns the id of the deleted post.
    async fn delete_post(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let deleted = state.posts.delete_by_id(&id).await.map_err(not_found)?;
        Ok(ID(deleted))
    }
}
