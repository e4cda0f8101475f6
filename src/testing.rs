//! In-memory backend used by the unit tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::document::{AssetReference, ProductDocument};
use crate::sanity::ContentBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload(String),
    Create(String),
}

/// Records every call in order. Uploads return `image-<filename>`, creates
/// return `doc-<n>` counting from 1, unless configured to fail.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    uploads: Mutex<Vec<PathBuf>>,
    created: Mutex<Vec<ProductDocument>>,
    failing_uploads: HashSet<String>,
    failing_creates: HashSet<String>,
}

impl RecordingBackend {
    pub fn fail_upload(mut self, filename: &str) -> Self {
        self.failing_uploads.insert(filename.to_string());
        self
    }

    pub fn fail_create(mut self, product_name: &str) -> Self {
        self.failing_creates.insert(product_name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<ProductDocument> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentBackend for RecordingBackend {
    async fn upload_image(&self, path: &Path) -> Result<AssetReference> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        self.calls.lock().unwrap().push(Call::Upload(name.clone()));
        self.uploads.lock().unwrap().push(path.to_path_buf());
        if self.failing_uploads.contains(&name) {
            return Err(anyhow!("upload rejected: {name}"));
        }
        Ok(AssetReference::new(format!("image-{name}")))
    }

    async fn create_document(&self, doc: &ProductDocument) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Create(doc.name.clone()));
        if self.failing_creates.contains(&doc.name) {
            return Err(anyhow!("create rejected: {}", doc.name));
        }
        let mut created = self.created.lock().unwrap();
        created.push(doc.clone());
        Ok(format!("doc-{}", created.len()))
    }
}
