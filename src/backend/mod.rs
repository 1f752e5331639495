pub mod client;
pub mod http_client;
pub mod scrub;
pub mod traits;
mod wire;

pub use client::BackendClient;
pub use traits::{PostGenerationService, StyleAnalysisService};
