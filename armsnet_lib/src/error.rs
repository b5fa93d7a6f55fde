//! Error types for the network layer.

use std::fmt;

/// Errors produced by the network layer, wrapping upstream export-client
/// errors and adding expansion, validation, and serialization failures.
#[derive(Debug)]
pub enum ArmsNetError {
    /// An error from the underlying export client.
    Api(armstrade_api::Error),
    /// A delivery-year range that cannot be expanded.
    YearRange(String),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// An unrecognized graph format name.
    UnknownFormat(String),
    /// Writing a graph file failed.
    Io(std::io::Error),
    /// JSON serialization failed.
    Json(serde_json::Error),
    /// YAML serialization failed.
    Yaml(serde_yml::Error),
    /// XML serialization failed.
    Xml(quick_xml::Error),
    /// Binary serialization failed.
    Binary(bincode::Error),
}

impl fmt::Display for ArmsNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::YearRange(msg) => write!(f, "Invalid delivery-year range: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnknownFormat(name) => write!(f, "Unknown graph format: {:?}", name),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Json(e) => write!(f, "JSON serialization error: {}", e),
            Self::Yaml(e) => write!(f, "YAML serialization error: {}", e),
            Self::Xml(e) => write!(f, "XML serialization error: {}", e),
            Self::Binary(e) => write!(f, "Binary serialization error: {}", e),
        }
    }
}

impl std::error::Error for ArmsNetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Yaml(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::Binary(e) => Some(e),
            _ => None,
        }
    }
}

impl From<armstrade_api::Error> for ArmsNetError {
    fn from(e: armstrade_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for ArmsNetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ArmsNetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_yml::Error> for ArmsNetError {
    fn from(e: serde_yml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<quick_xml::Error> for ArmsNetError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

impl From<bincode::Error> for ArmsNetError {
    fn from(e: bincode::Error) -> Self {
        Self::Binary(e)
    }
}
