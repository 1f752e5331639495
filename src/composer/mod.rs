#[allow(clippy::module_inception)]
mod composer;
pub mod model;
pub mod state;

pub use composer::PostComposer;
pub use model::{DraftRequest, GeneratedPost, StyleProfile, UrlList};
pub use state::{ComposerPhase, ComposerStatus};
