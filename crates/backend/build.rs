use std::env;
use std::fs;
use std::path::Path;

// Puts the workspace config.toml next to the built binary so the server finds it
// without extra flags (see shared::config::load_config).
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR looks like target/<profile>/build/backend-xxx/out
    let Some(binary_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{profile} not found above OUT_DIR, config.toml not copied");
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
    else {
        return;
    };

    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source
        );
        return;
    }

    if let Err(e) = fs::copy(&source, binary_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {e}");
    }
}
