use product_seed::logging::init_tracing;
use product_seed::util::env as env_util;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let env_file = env_util::init_env();
    if let Err(err) = init_tracing("info") {
        eprintln!("{err:#}");
    }
    match env_file {
        Some(file) => debug!(target: "env", file, "loaded environment file"),
        None => debug!(target: "env", "no .env.local or .env found"),
    }

    match product_seed::seed_products().await {
        Ok(summary) => {
            debug!(
                created = summary.created(),
                failed = summary.failed(),
                without_image = summary.without_image(),
                "import summary"
            );
        }
        Err(err) => {
            error!("💥 Global Error: {err:#}");
            std::process::exit(1);
        }
    }
}
