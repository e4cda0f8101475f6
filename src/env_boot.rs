use std::path::Path;

/// Local secrets file read before the regular `.env`.
pub const LOCAL_ENV_FILE: &str = ".env.local";

/// Load `.env.local` from the current working directory; if missing, fall back
/// to `.env`, then to the project root copies of both.
///
/// Returns the file that was loaded, if any. Values already present in the
/// process environment are never overwritten.
pub fn ensure_dotenv() -> Option<String> {
    if dotenv::from_filename(LOCAL_ENV_FILE).is_ok() {
        return Some(LOCAL_ENV_FILE.to_string());
    }
    if dotenv::dotenv().is_ok() {
        return Some(".env".to_string());
    }
    // Fallback to Cargo project root
    let root = env!("CARGO_MANIFEST_DIR");
    for name in [LOCAL_ENV_FILE, ".env"] {
        let candidate = Path::new(root).join(name);
        if dotenv::from_path(&candidate).is_ok() {
            return Some(candidate.display().to_string());
        }
    }
    None
}
