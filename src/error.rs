use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `StyleMind`.
///
/// Every composer operation returns one of these so the front-end decides how
/// to present it. Validation failures never touch the network; request
/// failures are never retried.
#[derive(Debug, Error)]
pub enum ComposerError {
    // ── Local input checks ──────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Backend / network ───────────────────────────────────────────────
    #[error("request failed: {0}")]
    Request(#[from] RequestFailure),

    // ── Overlap guard ───────────────────────────────────────────────────
    #[error("another request is still in flight")]
    Busy,

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ComposerError {
    /// True for failures caused by missing or malformed user input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ─── Validation errors ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter at least one blog URL")]
    NoUrls,

    #[error("URL slot {index} does not exist (have {len})")]
    UrlIndexOutOfRange { index: usize, len: usize },

    #[error("run a style analysis first")]
    MissingProfile,

    #[error("choose an image to describe")]
    MissingImage,

    #[error("enter a topic for the post")]
    BlankTopic,

    #[error("invalid image: {0}")]
    InvalidImage(String),
}

// ─── Request failures ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("{endpoint} could not be reached: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} timed out after {secs}s")]
    Timeout { endpoint: String, secs: u64 },

    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("{endpoint} reported an error: {message}")]
    Backend { endpoint: String, message: String },

    #[error("{endpoint} sent an unreadable response: {message}")]
    Decode { endpoint: String, message: String },
}

// ─── Config errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ComposerError>;
