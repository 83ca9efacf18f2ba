//! Disk storage for uploaded post images.
//!
//! Files land under `<uploads_dir>/posts/` and are served back through the
//! `/uploads` static file route, so the path stored in the database is the
//! URL path (`uploads/posts/<name>`), not the filesystem path.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::{ImageFormat, ImageReader};

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Detect the image format from magic bytes and validate it's allowed.
/// The client's filename and declared content type are never trusted.
pub fn sniff_format(data: &[u8]) -> Result<ImageFormat, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    Ok(format)
}

/// Filename template for post images. The extension comes from the sniffed
/// format, not from whatever the client called the file.
pub fn post_image_filename(user_id: i32, timestamp_ms: i64, format: ImageFormat) -> String {
    let ext = format.extensions_str().first().copied().unwrap_or("bin");
    format!("post-{}-{}.{}", user_id, timestamp_ms, ext)
}

/// Write an already-validated image to disk. Returns the URL path to store
/// in the database.
pub async fn store_post_image(
    uploads_dir: &Path,
    user_id: i32,
    format: ImageFormat,
    data: &[u8],
) -> std::io::Result<String> {
    let filename = post_image_filename(user_id, Utc::now().timestamp_millis(), format);

    let dir = uploads_dir.join("posts");
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&filename), data).await?;

    Ok(format!("uploads/posts/{}", filename))
}

fn stored_path_on_disk(uploads_dir: &Path, stored: &str) -> Option<PathBuf> {
    let rel = stored.strip_prefix("uploads/")?;
    // A stored path never navigates upward; refuse anything that tries.
    if rel.split('/').any(|seg| seg == ".." || seg.is_empty()) {
        return None;
    }
    Some(uploads_dir.join(rel))
}

/// Best-effort deletion of a previously stored image. Failures are logged
/// and swallowed; callers never fail a request over a leftover file.
pub async fn remove_image(uploads_dir: &Path, stored: &str) {
    let Some(path) = stored_path_on_disk(uploads_dir, stored) else {
        tracing::warn!(stored, "Refusing to delete image with unexpected path");
        return;
    };
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), "Failed to delete image file: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn sniffs_png() {
        assert_eq!(sniff_format(&png_bytes()).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn rejects_non_image() {
        assert!(sniff_format(b"<!doctype html><html></html>").is_err());
    }

    #[test]
    fn filename_embeds_owner_and_timestamp() {
        let name = post_image_filename(42, 1749550000123, ImageFormat::Jpeg);
        assert_eq!(name, "post-42-1749550000123.jpg");
    }

    #[test]
    fn filename_extension_tracks_format() {
        assert!(post_image_filename(1, 0, ImageFormat::WebP).ends_with(".webp"));
        assert!(post_image_filename(1, 0, ImageFormat::Gif).ends_with(".gif"));
    }

    #[test]
    fn stored_path_maps_under_uploads_dir() {
        let path = stored_path_on_disk(Path::new("/srv/uploads"), "uploads/posts/post-1-2.png");
        assert_eq!(path, Some(PathBuf::from("/srv/uploads/posts/post-1-2.png")));
    }

    #[test]
    fn stored_path_rejects_traversal() {
        assert!(stored_path_on_disk(Path::new("/srv/uploads"), "uploads/../etc/passwd").is_none());
        assert!(stored_path_on_disk(Path::new("/srv/uploads"), "elsewhere/file.png").is_none());
    }

    #[tokio::test]
    async fn store_and_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let data = png_bytes();

        let stored = store_post_image(dir.path(), 7, ImageFormat::Png, &data)
            .await
            .unwrap();
        assert!(stored.starts_with("uploads/posts/post-7-"));

        let on_disk = stored_path_on_disk(dir.path(), &stored).unwrap();
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), data);

        remove_image(dir.path(), &stored).await;
        assert!(!on_disk.exists());
    }
}
