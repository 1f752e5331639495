mod env_overrides;
mod loader;
#[cfg(test)]
pub(crate) mod test_env;
mod types;

pub use crate::media::MediaConfig;
pub use types::{ApiConfig, Config, DEFAULT_API_URL};
