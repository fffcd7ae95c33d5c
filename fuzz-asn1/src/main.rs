use anyhow::{Context, Result};
use clap::Parser;
use fuzz_asn1::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log records from the library crates go through the same subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let report = fuzz_asn1::run(&config)
        .with_context(|| format!("generation into {} failed", config.out_dir.display()))?;

    println!("{}", report);
    Ok(())
}
