pub mod catalog;
pub mod document;
pub mod env_boot;
pub mod logging;
pub mod orchestrator;
pub mod sanity;
pub mod submitter;
pub mod uploader;

pub mod util {
    pub mod env;
}

#[cfg(test)]
pub(crate) mod testing;

use anyhow::{Context, Result};

use orchestrator::{ImportOptions, ImportSummary};
use sanity::{SanityClient, SanityConfig};

/// Seed the built-in product catalog into the configured Sanity dataset.
///
/// Only setup can fail here (configuration, client construction); per-product
/// problems are logged and reported through the summary.
pub async fn seed_products() -> Result<ImportSummary> {
    util::env::init_env();
    let cfg = SanityConfig::from_env().context("sanity configuration")?;
    let client = SanityClient::new(&cfg)?;
    let options = ImportOptions::from_env();
    Ok(orchestrator::run_import(&client, &options, catalog::products()).await)
}
