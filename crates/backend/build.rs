use std::path::PathBuf;

// Copia o config.toml da raiz do workspace para junto do binario
// (target/debug ou target/release), onde o load_config procura por ele.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let source = match manifest_dir.parent().and_then(|p| p.parent()) {
        Some(root) => root.join("config.toml"),
        None => {
            println!("cargo:warning=Could not resolve the workspace root");
            return;
        }
    };

    if !source.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source
        );
        return;
    }

    // OUT_DIR tem a forma target/<profile>/build/backend-xxx/out;
    // sobe ate o diretorio do profile.
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR not set by cargo"));
    let profile = std::env::var("PROFILE").expect("PROFILE not set by cargo");
    let profile_dir = out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("OUT_DIR does not contain the profile directory");

    let destination = profile_dir.join("config.toml");
    if let Err(e) = std::fs::copy(&source, &destination) {
        println!("cargo:warning=Failed to copy config.toml: {}", e);
    }
}
