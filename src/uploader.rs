use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::document::AssetReference;
use crate::sanity::ContentBackend;

/// Upload `image_dir/filename` as an image asset.
///
/// A missing file or a failed upload yields `None` after logging; the backend
/// is only contacted when the file exists.
pub async fn upload_image<B>(backend: &B, image_dir: &Path, filename: &str) -> Option<AssetReference>
where
    B: ContentBackend + ?Sized,
{
    let path: PathBuf = image_dir.join(filename);

    match tokio::fs::try_exists(&path).await {
        Ok(true) => {}
        Ok(false) => {
            warn!(path = %path.display(), "⚠️ File not found: {}", path.display());
            return None;
        }
        Err(err) => {
            error!(path = %path.display(), "❌ Image upload failed for {filename}: {err}");
            return None;
        }
    }

    match backend.upload_image(&path).await {
        Ok(asset) => {
            info!(path = %path.display(), asset_id = %asset, "🖼️ Image uploaded: {filename}");
            Some(asset)
        }
        Err(err) => {
            error!(path = %path.display(), "❌ Image upload failed for {filename}: {err:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    #[tokio::test]
    async fn missing_file_never_reaches_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = RecordingBackend::default();

        let asset = upload_image(&backend, dir.path(), "nope.png").await;

        assert!(asset.is_none());
        assert!(backend.uploads().is_empty());
    }

    #[tokio::test]
    async fn existing_file_returns_backend_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("product_1.png"), b"\x89PNG").unwrap();
        let backend = RecordingBackend::default();

        let asset = upload_image(&backend, dir.path(), "product_1.png").await;

        assert_eq!(asset.unwrap().as_str(), "image-product_1.png");
        assert_eq!(backend.uploads(), vec![dir.path().join("product_1.png")]);
    }

    #[tokio::test]
    async fn upload_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.png"), b"x").unwrap();
        let backend = RecordingBackend::default().fail_upload("bad.png");

        let asset = upload_image(&backend, dir.path(), "bad.png").await;

        assert!(asset.is_none());
        assert_eq!(backend.uploads().len(), 1);
    }
}
