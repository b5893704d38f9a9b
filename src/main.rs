//! composepin - Pins `:latest` compose images to concrete registry tags
//!
//! For every service in the given compose files whose image is tagged
//! `latest`, the registry's tag listing is filtered by a regex and the
//! lexicographically greatest tag replaces `latest`. Rewritten files are
//! written to the output directory under their original names.

use clap::Parser;
use composepin::cli::CliArgs;
use composepin::compose::version_compose_file;
use composepin::registry::{DockerHubClient, HttpClient};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    // One client instance shared across the whole batch
    let registry = DockerHubClient::new(args.docker_registry_url.clone(), client);

    // Files are processed sequentially, in the order given; the first
    // failure aborts the run and earlier outputs remain on disk
    for file in &args.files {
        version_compose_file(file, &args.output_dir, &registry, &args.tag_regex).await?;
    }

    Ok(())
}
