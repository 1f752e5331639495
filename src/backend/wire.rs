//! JSON shapes exchanged with the StyleMind backend.

use crate::composer::model::StyleProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeStyleRequest<'a> {
    pub urls: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EnvelopeStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// `{"status": "success", "result": {...}}` or `{"status": "error", "message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeStyleEnvelope {
    #[serde(default)]
    pub status: Option<EnvelopeStatus>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<StyleProfile>,
}

impl AnalyzeStyleEnvelope {
    /// The profile on success, otherwise the backend's explanation.
    pub fn into_profile(self) -> Result<StyleProfile, String> {
        match (self.status, self.result) {
            (Some(EnvelopeStatus::Error), _) => Err(self
                .message
                .unwrap_or_else(|| "analysis failed without a message".into())),
            (_, Some(profile)) => Ok(profile),
            (_, None) => Err(self
                .message
                .unwrap_or_else(|| "response did not include a style profile".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PingResponse {
    #[serde(default)]
    pub message: Option<String>,
}
