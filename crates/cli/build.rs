fn main() {
    println!("cargo:rerun-if-env-changed=MRLOG_VERSION");

    // Release pipelines stamp the version through MRLOG_VERSION; local
    // builds fall back to the crate version.
    let version = std::env::var("MRLOG_VERSION")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=MRLOG_VERSION={version}");
}
