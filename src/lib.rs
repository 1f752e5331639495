#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod backend;
pub mod composer;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

pub use backend::{BackendClient, PostGenerationService, StyleAnalysisService};
pub use composer::{
    ComposerPhase, ComposerStatus, DraftRequest, GeneratedPost, PostComposer, StyleProfile,
    UrlList,
};
pub use config::Config;
pub use error::{ComposerError, RequestFailure, ValidationError};
pub use media::ImageAttachment;
