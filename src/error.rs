//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ComposeError: Issues with compose file reading, parsing and writing
//! - RegistryError: Issues with registry communication
//!
//! A non-200 registry response is deliberately NOT an error: the tag lookup
//! returns `None` and the caller falls back to the literal `latest` tag.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Compose file related errors
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// Registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to compose file operations
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Compose file not found
    #[error("compose file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read compose file
    #[error("failed to read compose file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write compose file
    #[error("failed to write compose file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// YAML serialization error
    #[error("failed to serialize YAML for {path}: {message}")]
    SerializeError { path: PathBuf, message: String },

    /// Document has no `services` mapping to rewrite
    #[error("no services mapping in {path}")]
    MissingServices { path: PathBuf },
}

/// Errors related to registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Network request failed
    #[error("failed to fetch tags for '{image}': {message}")]
    NetworkError { image: String, message: String },

    /// Invalid response from the registry
    #[error("invalid registry response for '{image}': {message}")]
    InvalidResponse { image: String, message: String },

    /// Timeout
    #[error("timeout while fetching tags for '{image}'")]
    Timeout { image: String },
}

impl ComposeError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ComposeError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ComposeError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ComposeError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ComposeError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new SerializeError
    pub fn serialize_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ComposeError::SerializeError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingServices error
    pub fn missing_services(path: impl Into<PathBuf>) -> Self {
        ComposeError::MissingServices { path: path.into() }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(image: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            image: image.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(image: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            image: image.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(image: impl Into<String>) -> Self {
        RegistryError::Timeout {
            image: image.into(),
        }
    }
}
