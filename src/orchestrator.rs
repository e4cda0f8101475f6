use std::path::PathBuf;

use tracing::{info, warn};

use crate::catalog::ProductDescriptor;
use crate::document::{AssetReference, ProductDocument};
use crate::sanity::ContentBackend;
use crate::submitter::submit_document;
use crate::uploader::upload_image;
use crate::util::env as env_util;

pub const DEFAULT_IMAGE_DIR: &str = "images/products";

/// Where the importer looks for product images.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub image_dir: PathBuf,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
        }
    }
}

impl ImportOptions {
    /// Defaults, with `PRODUCT_IMAGE_DIR` overriding the image directory.
    pub fn from_env() -> Self {
        let image_dir = env_util::env_opt("PRODUCT_IMAGE_DIR")
            .map(|v| PathBuf::from(v.trim()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR));
        Self { image_dir }
    }
}

/// What happened to one product.
#[derive(Debug, Clone)]
pub struct ProductOutcome {
    pub name: String,
    pub asset: Option<AssetReference>,
    /// Created document id, or the rendered error.
    pub document: Result<String, String>,
}

/// Per-product outcomes in processing order.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub outcomes: Vec<ProductOutcome>,
}

impl ImportSummary {
    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.document.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.created()
    }

    pub fn without_image(&self) -> usize {
        self.outcomes.iter().filter(|o| o.asset.is_none()).count()
    }
}

/// Seed `products` one at a time, in order: upload the image, then create the
/// document. Per-product failures are logged and recorded; the run always
/// moves on to the next product.
pub async fn run_import<B>(
    backend: &B,
    options: &ImportOptions,
    products: &[ProductDescriptor],
) -> ImportSummary
where
    B: ContentBackend + ?Sized,
{
    info!("🚀 Starting import...");
    if !options.image_dir.is_dir() {
        warn!(
            dir = %options.image_dir.display(),
            "image directory not found; products will be created without images"
        );
    }

    let mut summary = ImportSummary::default();
    for product in products {
        info!(product = product.name, "📦 Processing: {}", product.name);
        let asset = upload_image(backend, &options.image_dir, product.image_filename).await;
        let doc = ProductDocument::build(product, asset.clone());
        let document = submit_document(backend, product, &doc)
            .await
            .map_err(|err| format!("{err:#}"));
        summary.outcomes.push(ProductOutcome {
            name: product.name.to_string(),
            asset,
            document,
        });
    }

    info!("🏁 Import Complete!");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingBackend};

    fn three() -> [ProductDescriptor; 3] {
        [
            ProductDescriptor::new("Alpha One", 1.0, "a", "a.png"),
            ProductDescriptor::new("Beta Two", 2.0, "b", "b.png"),
            ProductDescriptor::new("Gamma Three", 3.0, "c", "c.png"),
        ]
    }

    fn image_dir(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for f in files {
            std::fs::write(dir.path().join(f), b"img").unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn missing_image_does_not_stop_the_run() {
        let dir = image_dir(&["a.png", "c.png"]);
        let backend = RecordingBackend::default();
        let options = ImportOptions {
            image_dir: dir.path().to_path_buf(),
        };

        let summary = run_import(&backend, &options, &three()).await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::Upload("a.png".into()),
                Call::Create("Alpha One".into()),
                Call::Create("Beta Two".into()),
                Call::Upload("c.png".into()),
                Call::Create("Gamma Three".into()),
            ]
        );
        assert_eq!(summary.created(), 3);
        assert_eq!(summary.without_image(), 1);

        let created = backend.created();
        assert_eq!(created[0].images.len(), 1);
        assert!(created[1].images.is_empty());
        assert_eq!(created[2].images.len(), 1);
    }

    #[tokio::test]
    async fn failures_are_recorded_and_skipped_past() {
        let dir = image_dir(&["a.png", "b.png", "c.png"]);
        let backend = RecordingBackend::default()
            .fail_upload("a.png")
            .fail_create("Beta Two");
        let options = ImportOptions {
            image_dir: dir.path().to_path_buf(),
        };

        let summary = run_import(&backend, &options, &three()).await;

        let names: Vec<&str> = summary.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Alpha One", "Beta Two", "Gamma Three"]);
        assert!(summary.outcomes[0].asset.is_none());
        assert!(summary.outcomes[0].document.is_ok());
        assert!(summary.outcomes[1].document.is_err());
        assert!(summary.outcomes[2].document.is_ok());
        assert_eq!(summary.failed(), 1);

        // Document for the failed upload still goes out, just without an image.
        assert!(backend.created()[0].images.is_empty());
    }

    #[tokio::test]
    async fn rerun_creates_duplicates() {
        let dir = image_dir(&[]);
        let backend = RecordingBackend::default();
        let options = ImportOptions {
            image_dir: dir.path().to_path_buf(),
        };
        let products = three();

        run_import(&backend, &options, &products).await;
        run_import(&backend, &options, &products).await;

        let created = backend.created();
        assert_eq!(created.len(), 6);
        assert_eq!(created[0].slug, created[3].slug);
    }

    #[tokio::test]
    async fn missing_image_dir_is_not_fatal() {
        let backend = RecordingBackend::default();
        let options = ImportOptions {
            image_dir: PathBuf::from("/definitely/not/here"),
        };

        let summary = run_import(&backend, &options, &three()).await;

        assert_eq!(summary.created(), 3);
        assert!(backend.uploads().is_empty());
    }
}
