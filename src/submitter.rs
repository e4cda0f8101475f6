use anyhow::Result;
use tracing::{error, info};

use crate::catalog::ProductDescriptor;
use crate::document::ProductDocument;
use crate::sanity::ContentBackend;

/// Create `doc` for `product` and log the outcome. The error is handed back
/// so the caller can record it; it is never retried.
pub async fn submit_document<B>(
    backend: &B,
    product: &ProductDescriptor,
    doc: &ProductDocument,
) -> Result<String>
where
    B: ContentBackend + ?Sized,
{
    match backend.create_document(doc).await {
        Ok(id) => {
            info!(product = product.name, document_id = %id, "✅ Uploaded: {}", product.name);
            Ok(id)
        }
        Err(err) => {
            error!(product = product.name, "❌ Failed: {}: {err:#}", product.name);
            Err(err)
        }
    }
}
