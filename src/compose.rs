//! Compose file rewriting
//!
//! This module provides:
//! - Loading a compose file into a generic YAML document
//! - Rewriting `image: name:latest` entries against a tag source
//! - Saving the document back in block style
//!
//! Everything except rewritten `image` values inside `services` passes
//! through untouched, including key order.

use crate::error::{AppError, ComposeError, RegistryError};
use crate::registry::TagSource;
use crate::tag::{select_latest, LATEST_TAG};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse a compose file into a generic YAML document
pub fn process_file(path: &Path) -> Result<Value, ComposeError> {
    if !path.exists() {
        return Err(ComposeError::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| ComposeError::read_error(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| ComposeError::parse_error(path, e.to_string()))
}

/// Serialize a document and write it to `path`, overwriting any existing file
pub fn save_file(doc: &Value, path: &Path) -> Result<(), ComposeError> {
    let content = serde_yaml::to_string(doc)
        .map_err(|e| ComposeError::serialize_error(path, e.to_string()))?;
    fs::write(path, content).map_err(|e| ComposeError::write_error(path, e))
}

/// Rewrite the `image` field of every service tagged exactly `latest`.
///
/// The service map is mutated in place so key order is preserved. Services
/// with a pinned tag, with no tag at all, or without an `image` string are
/// left untouched.
pub async fn version_services(
    services: &mut Mapping,
    filter: &Regex,
    source: &dyn TagSource,
) -> Result<(), RegistryError> {
    for (_service_name, config) in services.iter_mut() {
        let Some(image_value) = config.get_mut("image") else {
            continue;
        };
        let Some(image) = image_value.as_str() else {
            continue;
        };
        let Some((name, tag)) = image.split_once(':') else {
            continue;
        };
        if tag != LATEST_TAG {
            continue;
        }

        let candidates = source.image_tags(name, filter).await?.unwrap_or_default();
        let resolved = select_latest(&candidates);
        let versioned_image = format!("{}:{}", name, resolved);
        if candidates.is_empty() {
            println!("version is not set using latest for {}", name);
        } else {
            println!("versioned: {}", versioned_image);
        }
        *image_value = Value::String(versioned_image);
    }

    Ok(())
}

/// Process one compose file end to end: load, rewrite `services`, write the
/// result to `{output_dir}/{basename}`.
pub async fn version_compose_file(
    path: &Path,
    output_dir: &Path,
    source: &dyn TagSource,
    filter: &Regex,
) -> Result<(), AppError> {
    println!("Processing: {}", path.display());

    let mut doc = process_file(path)?;
    let services = doc
        .get_mut("services")
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| ComposeError::missing_services(path))?;

    version_services(services, filter, source).await?;

    let output_path = output_path_for(path, output_dir).ok_or_else(|| ComposeError::not_found(path))?;
    save_file(&doc, &output_path)?;
    Ok(())
}

/// Destination path: the original file name under the output directory
fn output_path_for(path: &Path, output_dir: &Path) -> Option<PathBuf> {
    path.file_name().map(|name| output_dir.join(name))
}
