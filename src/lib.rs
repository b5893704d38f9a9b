//! composepin - Pins `:latest` compose images to concrete registry tags
//!
//! This library provides the core functionality for resolving `latest`
//! image tags in compose files against a container registry:
//! - Registry tag listing (Docker Hub `v2/repositories` API)
//! - Lexicographic tag selection with a configurable filter regex
//! - Compose document rewriting with structure preservation

pub mod cli;
pub mod compose;
pub mod error;
pub mod registry;
pub mod tag;
