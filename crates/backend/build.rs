use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy the workspace `config.toml` next to the built binary
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = target_profile_dir() else {
        println!("cargo:warning=Could not locate target profile directory, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source_config.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source_config
        );
        return;
    }

    let dest_config = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source_config, &dest_config) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}

// OUT_DIR looks like target/<profile>/build/backend-xxx/out
fn target_profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
