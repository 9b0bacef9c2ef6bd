//! Upload persistence
//!
//! Writes raw upload bytes to the local uploads directory under a
//! uuid-prefixed name so repeated uploads of the same filename never
//! collide. No content validation and no catalog of stored files.

use crate::types::AppResult;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Save uploaded bytes under `<uploads_dir>/<uuid>_<filename>`, creating
/// the directory if absent. Returns the stored path.
pub async fn save_uploaded_file(
    data: &[u8],
    filename: &str,
    uploads_dir: &Path,
) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(uploads_dir).await?;

    let unique_filename = format!("{}_{}", Uuid::new_v4(), filename);
    let file_path = uploads_dir.join(unique_filename);

    tokio::fs::write(&file_path, data).await?;
    debug!(path = %file_path.display(), bytes = data.len(), "Saved uploaded file");

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_saves_bytes_and_returns_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_uploaded_file(b"hello", "notes.txt", dir.path())
            .await
            .unwrap();

        assert!(path.starts_with(dir.path()));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("_notes.txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_identical_filenames_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let first = save_uploaded_file(b"a", "report.pdf", dir.path())
            .await
            .unwrap();
        let second = save_uploaded_file(b"b", "report.pdf", dir.path())
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"a");
        assert_eq!(std::fs::read(&second).unwrap(), b"b");
    }

    #[tokio::test]
    async fn test_creates_uploads_dir_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");
        assert!(!nested.exists());

        save_uploaded_file(b"x", "a.csv", &nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
