use crate::error::ValidationError;
use crate::media::ImageAttachment;
use serde::{Deserialize, Serialize};

/// Blog post URLs to learn the writing style from.
///
/// Always holds at least one slot; blank slots are kept for editing but never
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlList {
    slots: Vec<String>,
}

impl Default for UrlList {
    fn default() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }
}

impl UrlList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty slot and return its index.
    pub fn add_slot(&mut self) -> usize {
        self.slots.push(String::new());
        self.slots.len() - 1
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), ValidationError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ValidationError::UrlIndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Non-blank entries in their original order and spelling.
    #[must_use]
    pub fn submittable(&self) -> Vec<String> {
        filter_blank(&self.slots)
    }
}

impl<S: Into<String>> FromIterator<S> for UrlList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let slots: Vec<String> = iter.into_iter().map(Into::into).collect();
        if slots.is_empty() {
            Self::default()
        } else {
            Self { slots }
        }
    }
}

pub(crate) fn filter_blank(urls: &[String]) -> Vec<String> {
    urls.iter()
        .filter(|url| !url.trim().is_empty())
        .cloned()
        .collect()
}

/// Tone summary returned by the analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Mean sentence length in characters.
    pub avg_length: f64,
    pub is_polite: bool,
    #[serde(default)]
    pub top_endings: Vec<String>,
    /// Directive handed verbatim to the generation stage.
    pub style_prompt: String,
}

/// Markdown post plus the backend's reading of the uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub content: String,
    pub image_desc: String,
}

/// Everything the generation stage needs, borrowed from the composer.
#[derive(Debug, Clone, Copy)]
pub struct DraftRequest<'a> {
    pub topic: &'a str,
    pub style_prompt: &'a str,
    pub image: &'a ImageAttachment,
}

impl<'a> DraftRequest<'a> {
    /// Assemble a request, naming the first missing piece.
    pub fn assemble(
        profile: Option<&'a StyleProfile>,
        image: Option<&'a ImageAttachment>,
        topic: &'a str,
    ) -> Result<Self, ValidationError> {
        let profile = profile.ok_or(ValidationError::MissingProfile)?;
        let image = image.ok_or(ValidationError::MissingImage)?;
        if topic.trim().is_empty() {
            return Err(ValidationError::BlankTopic);
        }
        Ok(Self {
            topic,
            style_prompt: &profile.style_prompt,
            image,
        })
    }
}
