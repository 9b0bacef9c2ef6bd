// Image metadata description. No OCR; this is a placeholder capability
// until a vision pipeline is wired in.

use crate::types::{AppError, AppResult};
use std::path::Path;

/// Describe an image file in one line: format, pixel dimensions, color mode.
pub async fn extract(path: &Path) -> String {
    match describe(path).await {
        Ok(info) => info,
        Err(e) => format!("Error processing image: {}", e),
    }
}

async fn describe(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path).await?;
    let format = image::guess_format(&bytes).map_err(|e| AppError::Parse(e.to_string()))?;
    let img = image::load_from_memory(&bytes).map_err(|e| AppError::Parse(e.to_string()))?;

    Ok(format!(
        "Image file: {:?}, Size: ({}, {}), Mode: {:?}",
        format,
        img.width(),
        img.height(),
        img.color()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[tokio::test]
    async fn test_describes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(4, 2, Rgb([255, 0, 0]));
        img.save(&path).unwrap();

        let info = extract(&path).await;
        assert!(info.starts_with("Image file: Png"), "got: {}", info);
        assert!(info.contains("Size: (4, 2)"));
        assert!(info.contains("Mode: Rgb8"));
    }

    #[tokio::test]
    async fn test_non_image_yields_error_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"plain bytes").unwrap();

        let info = extract(&path).await;
        assert!(info.starts_with("Error processing image:"), "got: {}", info);
    }

    #[tokio::test]
    async fn test_missing_file_yields_error_string() {
        let info = extract(Path::new("/nonexistent/photo.png")).await;
        assert!(info.starts_with("Error processing image:"), "got: {}", info);
    }
}
