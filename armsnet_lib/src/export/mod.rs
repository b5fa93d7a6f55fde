//! Graph serialization to interchange formats.
//!
//! The node-link structure backs the JSON, YAML, and binary encodings;
//! GEXF and GraphML are written with `quick-xml`; Pajek and GML are plain
//! text. Callers pick a [`GraphFormat`] and everything else follows.

mod node_link;
mod text;
mod xml;

pub use self::node_link::{to_node_link, NodeLinkEdge, NodeLinkGraph, NodeLinkNode};
pub use self::text::{write_gml, write_pajek};
pub use self::xml::{write_gexf, write_graphml};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::ArmsNetError;
use crate::network::ArmsNetwork;

/// Supported graph interchange formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphFormat {
    /// GEXF 1.2draft XML.
    Gexf,
    /// Node-link JSON.
    Json,
    /// Node-link structure in a compact binary encoding.
    Binary,
    /// Pajek NET.
    Pajek,
    /// Node-link YAML.
    Yaml,
    /// GML blocks.
    Gml,
    /// GraphML XML.
    GraphMl,
}

impl GraphFormat {
    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFormat::Gexf => "gexf",
            GraphFormat::Json => "json",
            GraphFormat::Binary => "bin",
            GraphFormat::Pajek => "net",
            GraphFormat::Yaml => "yaml",
            GraphFormat::Gml => "gml",
            GraphFormat::GraphMl => "graphml",
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::Gexf => write!(f, "gexf"),
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Binary => write!(f, "binary"),
            GraphFormat::Pajek => write!(f, "pajek"),
            GraphFormat::Yaml => write!(f, "yaml"),
            GraphFormat::Gml => write!(f, "gml"),
            GraphFormat::GraphMl => write!(f, "graphml"),
        }
    }
}

impl FromStr for GraphFormat {
    type Err = ArmsNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gexf" => Ok(GraphFormat::Gexf),
            "json" => Ok(GraphFormat::Json),
            "binary" | "bin" => Ok(GraphFormat::Binary),
            "pajek" | "net" => Ok(GraphFormat::Pajek),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            "gml" => Ok(GraphFormat::Gml),
            "graphml" => Ok(GraphFormat::GraphMl),
            _ => Err(ArmsNetError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes the network to `path` in the given format.
pub fn write_network(
    network: &ArmsNetwork,
    path: &Path,
    format: GraphFormat,
) -> Result<(), ArmsNetError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(network, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Writes the network to any sink in the given format.
pub fn write_to<W: Write>(
    network: &ArmsNetwork,
    writer: &mut W,
    format: GraphFormat,
) -> Result<(), ArmsNetError> {
    match format {
        GraphFormat::Json => serde_json::to_writer(&mut *writer, &to_node_link(network))?,
        GraphFormat::Yaml => serde_yml::to_writer(&mut *writer, &to_node_link(network))?,
        GraphFormat::Binary => bincode::serialize_into(&mut *writer, &to_node_link(network))?,
        GraphFormat::Gexf => write_gexf(network, writer)?,
        GraphFormat::GraphMl => write_graphml(network, writer)?,
        GraphFormat::Pajek => write_pajek(network, writer)?,
        GraphFormat::Gml => write_gml(network, writer)?,
    }
    Ok(())
}
