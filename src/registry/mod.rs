//! Registry access for listing image tags
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Docker Hub tag-listing adapter
//! - The TagSource trait seam between rewriter and registry

mod client;
mod docker_hub;

pub use client::HttpClient;
pub use docker_hub::DockerHubClient;

use crate::error::RegistryError;
use crate::tag::TagInfo;
use async_trait::async_trait;
use regex::Regex;

/// Trait for sources of image tags
#[async_trait]
pub trait TagSource: Send + Sync {
    /// List tags for an image whose names match `filter` from the start.
    ///
    /// `Ok(None)` means the registry answered with a non-200 status and the
    /// image should be treated as having no tags at all.
    async fn image_tags(
        &self,
        image: &str,
        filter: &Regex,
    ) -> Result<Option<Vec<TagInfo>>, RegistryError>;
}
