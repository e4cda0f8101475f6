pub mod client;

pub use client::SanityClient;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::document::{AssetReference, ProductDocument};
use crate::util::env as env_util;

pub const DEFAULT_PROJECT_ID: &str = "3xi6v4kc";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2025-12-17";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// The two backend operations the importer consumes.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Upload the file at `path` as an image asset and return its id.
    async fn upload_image(&self, path: &Path) -> Result<AssetReference>;

    /// Create `doc` and return the id the backend assigned to it.
    async fn create_document(&self, doc: &ProductDocument) -> Result<String>;
}

/// Connection settings for a Sanity project.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: String,
    /// Overrides `https://<project>.api.sanity.io` when set.
    pub api_host: Option<String>,
    pub timeout: Duration,
}

impl SanityConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: token.into(),
            api_host: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build from the process environment after loading `.env.local`.
    ///
    /// `SANITY_API_TOKEN` is required; everything else falls back to the
    /// built-in project settings.
    pub fn from_env() -> Result<Self> {
        env_util::preflight_check(
            "sanity",
            &["SANITY_API_TOKEN"],
            &[
                "SANITY_PROJECT_ID",
                "SANITY_DATASET",
                "SANITY_API_VERSION",
                "SANITY_API_HOST",
                "SANITY_API_TOKEN",
            ],
        )?;

        let mut cfg = Self::new(env_util::env_req("SANITY_API_TOKEN")?);
        if let Some(v) = env_util::env_opt("SANITY_PROJECT_ID") {
            cfg.project_id = v.trim().to_string();
        }
        if let Some(v) = env_util::env_opt("SANITY_DATASET") {
            cfg.dataset = v.trim().to_string();
        }
        if let Some(v) = env_util::env_opt("SANITY_API_VERSION") {
            cfg.api_version = v.trim().trim_start_matches('v').to_string();
        }
        cfg.api_host = env_util::env_opt("SANITY_API_HOST").map(|v| v.trim().to_string());
        cfg.timeout = Duration::from_secs(env_util::env_parse(
            "SANITY_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        ));
        Ok(cfg)
    }

    /// Base URL for mutations and asset uploads, e.g.
    /// `https://3xi6v4kc.api.sanity.io/v2025-12-17`.
    pub fn api_base(&self) -> String {
        let host = match self.api_host.as_deref() {
            Some(h) => h.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        format!("{}/v{}", host, self.api_version)
    }
}
