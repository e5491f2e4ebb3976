// Shared test fixture for post drafts, seeded from `json/post_draft.json`.

use crate::modules::posts::core::post::PostDraft;

pub struct PostDraftBuilder {
    inner: PostDraft,
}

impl Default for PostDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PostDraftBuilder {
    pub fn new() -> Self {
        let inner: PostDraft = serde_json::from_str(include_str!("json/post_draft.json"))
            .expect("post_draft.json is not a valid draft");
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn build(self) -> PostDraft {
        self.inner
    }
}
