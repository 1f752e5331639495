use crate::composer::model::{DraftRequest, GeneratedPost, StyleProfile};
use crate::error::RequestFailure;
use async_trait::async_trait;

/// Learns a writer's tone from published posts.
#[async_trait]
pub trait StyleAnalysisService: Send + Sync {
    /// `urls` is already filtered: non-empty, no blank entries.
    async fn analyze_style(&self, urls: &[String]) -> Result<StyleProfile, RequestFailure>;
}

/// Describes an image and drafts a post in a given style.
#[async_trait]
pub trait PostGenerationService: Send + Sync {
    async fn generate_post(
        &self,
        request: DraftRequest<'_>,
    ) -> Result<GeneratedPost, RequestFailure>;
}
