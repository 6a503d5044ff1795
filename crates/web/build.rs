//! Build script for the web crate.
//!
//! Generates content-based hashes for static assets so templates can
//! cache-bust them with a query string.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_asset("static/css/main.css", "CSS_HASH");
    hash_asset("static/js/order-form.js", "JS_HASH");
}

/// Hash a static asset and expose the first 8 hex chars as `env_var`.
///
/// Sets `env_var` for use with `env!(...)` in the filters module.
fn hash_asset(relative_path: &str, env_var: &str) {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let path = Path::new(&manifest_dir).join(relative_path);

    // Tell Cargo to rerun if the asset changes
    println!("cargo:rerun-if-changed={}", path.display());

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {relative_path}: {e}");
            println!("cargo:rustc-env={env_var}=");
            return;
        }
    };

    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = &hash[..8];

    println!("cargo:rustc-env={env_var}={short_hash}");
}
