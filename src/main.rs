use anyhow::Result;
use clap::Parser;
use instance_data::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    tracing::info!(upload = cli.upload, "CLI arguments parsed, invoking run");
    let result = run(cli).await;
    match &result {
        Ok(report) => {
            for entry in &report.entries {
                println!(
                    "{}: {} ({} bytes, sha256 {})",
                    entry.provider, entry.destination, entry.bytes, entry.sha256
                );
            }
            tracing::info!("CLI completed successfully");
        }
        Err(e) => tracing::error!(error = %e, "CLI exited with error"),
    }
    result.map(|_| ())
}
