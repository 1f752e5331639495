use super::detection::detect_media_type;
use super::types::{ImageAttachment, MediaConfig, MediaType};
use crate::error::ValidationError;
use std::path::Path;

impl ImageAttachment {
    /// Check and wrap bytes that are already in memory.
    pub fn from_bytes(
        data: Vec<u8>,
        filename: &str,
        config: &MediaConfig,
    ) -> Result<Self, ValidationError> {
        if data.is_empty() {
            return Err(ValidationError::InvalidImage(format!("{filename} is empty")));
        }

        let limit = config.max_file_size_bytes();
        if data.len() as u64 > limit {
            return Err(ValidationError::InvalidImage(format!(
                "{filename} is {} bytes, limit is {limit}",
                data.len()
            )));
        }

        let (mime_type, media_type) = detect_media_type(&data, Some(filename));
        if media_type != MediaType::Image {
            return Err(ValidationError::InvalidImage(format!(
                "{filename} looks like {mime_type}, not an image"
            )));
        }
        let mime_type: mime::Mime = mime_type
            .parse()
            .map_err(|e| ValidationError::InvalidImage(format!("{filename}: {e}")))?;

        Ok(Self {
            filename: filename.to_string(),
            mime_type,
            data,
        })
    }

    /// Read an image from disk. `~` is expanded.
    pub async fn from_path(path: &str, config: &MediaConfig) -> Result<Self, ValidationError> {
        let expanded = shellexpand::tilde(path).to_string();
        let path = Path::new(&expanded);

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| ValidationError::InvalidImage(format!("{expanded} is not a file")))?;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ValidationError::InvalidImage(format!("cannot read {expanded}: {e}")))?;
        if metadata.len() > config.max_file_size_bytes() {
            return Err(ValidationError::InvalidImage(format!(
                "{filename} is {} bytes, limit is {}",
                metadata.len(),
                config.max_file_size_bytes()
            )));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ValidationError::InvalidImage(format!("cannot read {expanded}: {e}")))?;

        tracing::debug!(file = %filename, bytes = data.len(), "loaded image");
        Self::from_bytes(data, &filename, config)
    }
}
