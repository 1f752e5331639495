use serde::Serialize;
use tokio::sync::watch;

pub const ANALYZING_MESSAGE: &str = "Analyzing blog writing style...";
pub const GENERATING_MESSAGE: &str =
    "Describing the image and writing the post... (about 1-2 minutes)";

/// Where the two-stage workflow stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComposerPhase {
    #[default]
    Idle,
    Analyzing,
    Analyzed,
    Generating,
    Generated,
}

impl ComposerPhase {
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Analyzing | Self::Generating)
    }
}

/// Snapshot published to front-ends through [`super::PostComposer::subscribe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposerStatus {
    pub phase: ComposerPhase,
    pub busy: bool,
    /// Progress text, empty while idle.
    pub message: String,
    /// Text of the most recent failure, cleared when a new request starts.
    pub last_error: Option<String>,
}

/// Marks the composer busy for as long as it lives.
///
/// Dropping the guard always clears the busy flag, so a request that errors,
/// panics, or whose future is dropped mid-flight cannot leave the composer
/// stuck. Without an explicit [`InFlight::settle`] the phase falls back to
/// what it was before the request began.
pub(crate) struct InFlight<'a> {
    status: &'a watch::Sender<ComposerStatus>,
    settled_phase: ComposerPhase,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(
        status: &'a watch::Sender<ComposerStatus>,
        phase: ComposerPhase,
        message: &str,
    ) -> Self {
        let previous = status.borrow().phase;
        status.send_modify(|s| {
            s.phase = phase;
            s.busy = true;
            s.message = message.to_string();
            s.last_error = None;
        });
        Self {
            status,
            settled_phase: previous,
        }
    }

    pub(crate) fn settle(mut self, phase: ComposerPhase) {
        self.settled_phase = phase;
    }

    pub(crate) fn fail(self, error: &str) {
        self.status
            .send_modify(|s| s.last_error = Some(error.to_string()));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let phase = self.settled_phase;
        self.status.send_modify(|s| {
            s.phase = phase;
            s.busy = false;
            s.message.clear();
        });
    }
}
