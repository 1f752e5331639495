pub mod detection;
mod loader;
pub mod types;

pub use types::{ImageAttachment, MediaConfig, MediaType};
