use super::model::{DraftRequest, GeneratedPost, StyleProfile, UrlList, filter_blank};
use super::state::{
    ANALYZING_MESSAGE, ComposerPhase, ComposerStatus, GENERATING_MESSAGE, InFlight,
};
use crate::backend::{BackendClient, PostGenerationService, StyleAnalysisService};
use crate::error::{ComposerError, Result, ValidationError};
use crate::media::ImageAttachment;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Owns one drafting session: URLs, style profile, topic, image and result.
///
/// State changes only through the methods below. The two request methods take
/// `&mut self`, so a single composer can never have overlapping requests.
pub struct PostComposer {
    analyzer: Arc<dyn StyleAnalysisService>,
    generator: Arc<dyn PostGenerationService>,
    urls: UrlList,
    profile: Option<StyleProfile>,
    topic: String,
    image: Option<ImageAttachment>,
    post: Option<GeneratedPost>,
    status: watch::Sender<ComposerStatus>,
}

impl PostComposer {
    pub fn new(
        analyzer: Arc<dyn StyleAnalysisService>,
        generator: Arc<dyn PostGenerationService>,
    ) -> Self {
        let (status, _) = watch::channel(ComposerStatus::default());
        Self {
            analyzer,
            generator,
            urls: UrlList::new(),
            profile: None,
            topic: String::new(),
            image: None,
            post: None,
            status,
        }
    }

    /// Use one backend for both stages.
    pub fn with_backend(backend: Arc<BackendClient>) -> Self {
        let analyzer: Arc<dyn StyleAnalysisService> = backend.clone();
        Self::new(analyzer, backend)
    }

    // ── Form state ──────────────────────────────────────────────────────

    #[must_use]
    pub fn urls(&self) -> &UrlList {
        &self.urls
    }

    pub fn urls_mut(&mut self) -> &mut UrlList {
        &mut self.urls
    }

    pub fn add_url_slot(&mut self) -> usize {
        self.urls.add_slot()
    }

    pub fn set_url(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        Ok(self.urls.set(index, value)?)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageAttachment) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    #[must_use]
    pub fn profile(&self) -> Option<&StyleProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn post(&self) -> Option<&GeneratedPost> {
        self.post.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> ComposerStatus {
        self.status.borrow().clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status.borrow().busy
    }

    /// Follow phase and busy changes while a request is running.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ComposerStatus> {
        self.status.subscribe()
    }

    /// Whether the generate action should be offered at all.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.profile.is_some() && !self.is_busy()
    }

    // ── Stage 1 ─────────────────────────────────────────────────────────

    /// Analyze the URLs currently in the form.
    pub async fn analyze_current_urls(&mut self) -> Result<&StyleProfile> {
        let urls = self.urls.slots().to_vec();
        self.request_style_analysis(&urls).await
    }

    /// Ask the backend for a style profile of `urls`.
    ///
    /// Blank entries are dropped first; if nothing is left no request is made.
    /// A success replaces the stored profile; a failure leaves it untouched.
    pub async fn request_style_analysis(&mut self, urls: &[String]) -> Result<&StyleProfile> {
        if self.is_busy() {
            return Err(ComposerError::Busy);
        }

        let urls = filter_blank(urls);
        if urls.is_empty() {
            return Err(ValidationError::NoUrls.into());
        }

        info!(count = urls.len(), "style analysis started");
        let flight = InFlight::begin(&self.status, ComposerPhase::Analyzing, ANALYZING_MESSAGE);

        match self.analyzer.analyze_style(&urls).await {
            Ok(profile) => {
                flight.settle(ComposerPhase::Analyzed);
                info!(endings = profile.top_endings.len(), "style analysis finished");
                Ok(&*self.profile.insert(profile))
            }
            Err(failure) => {
                warn!(error = %failure, "style analysis failed");
                flight.fail(&failure.to_string());
                Err(failure.into())
            }
        }
    }

    // ── Stage 2 ─────────────────────────────────────────────────────────

    /// Generate a post from the stored profile, image and topic.
    ///
    /// All three must be present; otherwise no request is made. A success
    /// replaces the stored post; a failure leaves the previous one in place.
    pub async fn request_post_generation(&mut self) -> Result<&GeneratedPost> {
        if self.is_busy() {
            return Err(ComposerError::Busy);
        }

        let draft =
            DraftRequest::assemble(self.profile.as_ref(), self.image.as_ref(), &self.topic)?;

        info!(
            topic = draft.topic,
            image = %draft.image.filename,
            "post generation started"
        );
        let flight = InFlight::begin(&self.status, ComposerPhase::Generating, GENERATING_MESSAGE);

        match self.generator.generate_post(draft).await {
            Ok(post) => {
                flight.settle(ComposerPhase::Generated);
                info!("post generation finished");
                Ok(&*self.post.insert(post))
            }
            Err(failure) => {
                warn!(error = %failure, "post generation failed");
                flight.fail(&failure.to_string());
                Err(failure.into())
            }
        }
    }
}
