use super::types::MediaType;

#[must_use]
pub fn detect_mime(data: &[u8]) -> Option<String> {
    infer::get(data).map(|info| info.mime_type().to_string())
}

#[must_use]
pub fn detect_mime_from_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg".into()),
        "png" => Some("image/png".into()),
        "gif" => Some("image/gif".into()),
        "webp" => Some("image/webp".into()),
        "bmp" => Some("image/bmp".into()),
        "heic" => Some("image/heic".into()),
        "avif" => Some("image/avif".into()),
        "pdf" => Some("application/pdf".into()),
        "txt" | "md" => Some("text/plain".into()),
        _ => None,
    }
}

/// Magic bytes first, then the file extension, then `application/octet-stream`.
#[must_use]
pub fn detect_media_type(data: &[u8], filename: Option<&str>) -> (String, MediaType) {
    let mime = detect_mime(data)
        .or_else(|| filename.and_then(detect_mime_from_extension))
        .unwrap_or_else(|| "application/octet-stream".into());
    let media_type = MediaType::from_mime(&mime);
    (mime, media_type)
}
