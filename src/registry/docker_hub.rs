//! Docker Hub tag-listing adapter
//!
//! Fetches image tags from the registry's repository tag endpoint.
//! API endpoint: {base}/v2/repositories/{image}/tags

use crate::error::RegistryError;
use crate::registry::{HttpClient, TagSource};
use crate::tag::TagInfo;
use async_trait::async_trait;
use chrono::DateTime;
use regex::Regex;
use serde::Deserialize;

/// Docker Hub adapter
pub struct DockerHubClient {
    client: HttpClient,
    base_url: String,
}

/// Tag listing response
#[derive(Debug, Deserialize)]
struct TagsResponse {
    /// Tag entries, one page only
    results: Vec<TagEntry>,
}

/// A single tag entry
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
    /// RFC 3339 with microsecond precision and offset
    last_updated: String,
}

impl DockerHubClient {
    /// Create a new Docker Hub adapter
    pub fn new(base_url: impl Into<String>, client: HttpClient) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the tag-listing URL for an image
    fn build_url(&self, image: &str) -> String {
        format!("{}/v2/repositories/{}/tags", self.base_url, image)
    }
}

/// Match-from-start semantics: the pattern must match at position 0 but
/// need not consume the whole name.
fn matches_from_start(filter: &Regex, name: &str) -> bool {
    filter.find(name).map_or(false, |m| m.start() == 0)
}

#[async_trait]
impl TagSource for DockerHubClient {
    async fn image_tags(
        &self,
        image: &str,
        filter: &Regex,
    ) -> Result<Option<Vec<TagInfo>>, RegistryError> {
        let url = self.build_url(image);
        let response = self.client.get(&url, image).await?;

        if response.status() != reqwest::StatusCode::OK {
            // Not an error: the caller falls back to the literal latest tag
            return Ok(None);
        }

        let body: TagsResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::invalid_response(image, format!("bad JSON: {}", e)))?;

        let mut tags = Vec::new();
        for entry in body.results {
            if !matches_from_start(filter, &entry.name) {
                continue;
            }
            let last_updated = DateTime::parse_from_rfc3339(&entry.last_updated).map_err(|e| {
                RegistryError::invalid_response(
                    image,
                    format!("bad last_updated '{}': {}", entry.last_updated, e),
                )
            })?;
            tags.push(TagInfo::new(entry.name, last_updated));
        }

        Ok(Some(tags))
    }
}
