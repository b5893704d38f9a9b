//! CLI argument parsing module for composepin

use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

/// Default tag filter: dotted numeric version strings with an optional
/// final wildcard segment (Docker Hub convention)
pub const DEFAULT_TAG_REGEX: &str = r"^(\d+\.)?(\d+\.)?(\*|\d+)$";

/// Default registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com";

/// Parse and compile a tag filter regex
fn parse_regex(s: &str) -> Result<Regex, String> {
    Regex::new(s).map_err(|e| format!("invalid tag regex '{}': {}", s, e))
}

/// Compose file image versioner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "composepin",
    version,
    about = "Pins :latest compose images to concrete registry tags"
)]
pub struct CliArgs {
    /// Compose files to process, in order
    #[arg(long, required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Directory the rewritten files are written to
    #[arg(long = "output_dir")]
    pub output_dir: PathBuf,

    /// Regex a registry tag must match (from the start) to be a candidate
    #[arg(long = "tag_regex", value_parser = parse_regex, default_value = DEFAULT_TAG_REGEX)]
    pub tag_regex: Regex,

    /// Base URL of the registry's tag-listing API
    #[arg(long = "docker_registry_url", default_value = DEFAULT_REGISTRY_URL)]
    pub docker_registry_url: String,
}
