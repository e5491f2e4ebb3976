// In memory post collection.
//
// Invariants
// - Posts are kept in insertion order; `list` hands out a reversed copy and never
//   reorders the stored sequence.
// - Every id handed out is remembered, so an id is never issued twice in the
//   lifetime of the store, even after the post carrying it was deleted.
// - Replace overwrites title and content in place; the position does not move.

use std::collections::HashSet;

use uuid::Uuid;

use crate::modules::posts::core::errors::PostStoreError;
use crate::modules::posts::core::id_generator::{IdGenerator, UuidV7Generator};
use crate::modules::posts::core::post::{Post, PostDraft};

const MAX_ID_ATTEMPTS: usize = 8;

pub struct PostStore {
    posts: Vec<Post>,
    issued_ids: HashSet<String>,
    id_generator: Box<dyn IdGenerator>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    /// An empty store issuing uuid v7 ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidV7Generator)
    }

    pub fn with_id_generator(id_generator: impl IdGenerator + 'static) -> Self {
        Self {
            posts: Vec::new(),
            issued_ids: HashSet::new(),
            id_generator: Box::new(id_generator),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn create(&mut self, draft: PostDraft) -> Post {
        let id = self.fresh_id();
        let post = draft.into_post(id);
        self.posts.push(post.clone());
        tracing::info!(post_id = %post.id, "post created");
        post
    }

    /// All posts, most recently created first.
    pub fn list(&self) -> Vec<Post> {
        self.posts.iter().rev().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Post, PostStoreError> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| Self::miss(id))
    }

    pub fn replace_by_id(&mut self, id: &str, draft: PostDraft) -> Result<Post, PostStoreError> {
        let index = self.position_of(id)?;
        let slot = &mut self.posts[index];
        slot.title = draft.title;
        slot.content = draft.content;
        tracing::info!(post_id = %id, "post replaced");
        Ok(slot.clone())
    }

    /// Removes the post and returns its id.
    pub fn delete_by_id(&mut self, id: &str) -> Result<String, PostStoreError> {
        let index = self.position_of(id)?;
        let removed = self.posts.remove(index);
        tracing::info!(post_id = %removed.id, "post deleted");
        Ok(removed.id)
    }

    fn position_of(&self, id: &str) -> Result<usize, PostStoreError> {
        self.posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| Self::miss(id))
    }

    fn miss(id: &str) -> PostStoreError {
        tracing::debug!(post_id = %id, "post lookup missed");
        PostStoreError::not_found(id)
    }

    fn fresh_id(&mut self) -> String {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.id_generator.next_id();
            if self.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
            tracing::warn!(post_id = %candidate, "id generator returned an issued id, regenerating");
        }
        loop {
            let candidate = Uuid::new_v4().to_string();
            if self.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
