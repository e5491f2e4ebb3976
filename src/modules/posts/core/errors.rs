use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostStoreError {
    #[error("post {id} not found")]
    NotFound { id: String },
}

impl PostStoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
