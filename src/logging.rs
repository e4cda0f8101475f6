use tracing_subscriber::{fmt, EnvFilter};

/// HTTP stack crates that are chatty at `debug`; held back unless `RUST_LOG`
/// says otherwise.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn", "h2=warn"];

/// Filter for a run: `rust_log` when it parses, otherwise `default_filter`
/// with the HTTP stack capped at `warn`.
pub fn build_filter(default_filter: &str, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    if let Some(spec) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(spec) {
            return Ok(filter);
        }
    }

    let mut filter = EnvFilter::try_new(default_filter)?;
    for directive in QUIET_DEPENDENCIES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber for the seeding run.
///
/// Status lines are read by whoever runs the import, so the module target is
/// left out; timestamps stay so slow uploads are visible.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(default_filter, rust_log.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
