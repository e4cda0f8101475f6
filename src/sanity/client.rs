use std::path::Path;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{header, Body, Client};
use serde::Serialize;
use serde_json::{json, Value};
use tokio_util::io::ReaderStream;
use tracing::debug;
use url::Url;

use super::{ContentBackend, SanityConfig};
use crate::document::{AssetReference, ProductDocument};

fn truncate_for_log(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut cut = max_len;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push('…');
    }
    s
}

/// Thin client over the Sanity HTTP API: image asset uploads and document
/// mutations. One instance (and one connection pool) is shared for a run.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: Client,
    api_base: String,
    dataset: String,
    token: String,
}

impl SanityClient {
    pub fn new(cfg: &SanityConfig) -> Result<Self> {
        if cfg.project_id.trim().is_empty() {
            return Err(anyhow!("sanity project id is empty"));
        }
        if cfg.dataset.trim().is_empty() {
            return Err(anyhow!("sanity dataset is empty"));
        }
        let http = Client::builder()
            .user_agent(concat!("product-seed/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            http,
            api_base: cfg.api_base(),
            dataset: cfg.dataset.clone(),
            token: cfg.token.clone(),
        })
    }

    fn upload_url(&self, filename: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/assets/images/{}",
            self.api_base, self.dataset
        ))
        .with_context(|| format!("invalid asset url for base {}", self.api_base))?;
        if let Some(name) = filename {
            url.query_pairs_mut().append_pair("filename", name);
        }
        Ok(url)
    }

    fn mutate_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/data/mutate/{}", self.api_base, self.dataset))
            .with_context(|| format!("invalid mutate url for base {}", self.api_base))?;
        url.query_pairs_mut()
            .append_pair("returnIds", "true")
            .append_pair("visibility", "sync");
        Ok(url)
    }

    async fn error_for_status(resp: reqwest::Response, what: &str, url: &Url) -> Result<Value> {
        let status = resp.status();
        if !status.is_success() {
            let body = truncate_for_log(resp.text().await.unwrap_or_default(), 2000);
            return Err(anyhow!("sanity {what} failed: {status} url={url} body={body}"));
        }
        resp.json::<Value>()
            .await
            .with_context(|| format!("sanity {what}: response was not json"))
    }
}

#[async_trait]
impl ContentBackend for SanityClient {
    async fn upload_image(&self, path: &Path) -> Result<AssetReference> {
        let filename = path.file_name().and_then(|n| n.to_str());
        let url = self.upload_url(filename)?;
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("open {}", path.display()))?;
        let len = file
            .metadata()
            .await
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        debug!(path = %path.display(), bytes = len, mime = %mime, "uploading image asset");

        let resp = self
            .http
            .post(url.clone())
            .bearer_auth(&self.token)
            .header(header::CONTENT_TYPE, mime.to_string())
            .header(header::CONTENT_LENGTH, len.to_string())
            .body(Body::wrap_stream(ReaderStream::new(file)))
            .send()
            .await
            .context("sanity asset upload request failed")?;
        let body = Self::error_for_status(resp, "asset upload", &url).await?;
        parse_asset_id(&body)
    }

    async fn create_document(&self, doc: &ProductDocument) -> Result<String> {
        let url = self.mutate_url()?;
        let resp = self
            .http
            .post(url.clone())
            .bearer_auth(&self.token)
            .json(&create_mutation(doc))
            .send()
            .await
            .context("sanity create request failed")?;
        let body = Self::error_for_status(resp, "create", &url).await?;
        parse_created_id(&body)
    }
}

/// `{ "mutations": [ { "create": doc } ] }`
pub(crate) fn create_mutation<T: Serialize>(doc: &T) -> Value {
    json!({ "mutations": [ { "create": doc } ] })
}

/// Pull the asset id out of an upload response (`{"document": {"_id": ..}}`).
pub(crate) fn parse_asset_id(body: &Value) -> Result<AssetReference> {
    body.get("document")
        .and_then(|d| d.get("_id"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(AssetReference::new)
        .ok_or_else(|| anyhow!("asset upload response missing document._id"))
}

/// Pull the created document id out of a mutate response
/// (`{"transactionId": .., "results": [{"id": .., "operation": "create"}]}`).
pub(crate) fn parse_created_id(body: &Value) -> Result<String> {
    let results = body
        .get("results")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("mutate response missing results"))?;
    results
        .iter()
        .find(|r| r.get("operation").and_then(|o| o.as_str()).unwrap_or("create") == "create")
        .and_then(|r| r.get("id"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("mutate response has no created document id"))
}
