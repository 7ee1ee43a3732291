// src/utilities/logging.rs

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // RUST_LOG=crystalvis=debug,wgpu=warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,naga=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}
