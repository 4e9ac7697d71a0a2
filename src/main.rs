use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ghassan_verifier::{run_server, AppConfig, ReliabilityVerifier};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let verifier = ReliabilityVerifier::omani_literature()?;

    run_server(config, verifier).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
