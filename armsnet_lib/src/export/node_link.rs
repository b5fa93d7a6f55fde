//! Node-link representation of a network.
//!
//! Backs the JSON, YAML, and binary encodings. Attribute keys follow the
//! export's CSV header; undefined attributes are carried as nulls so the
//! encodings stay structurally identical.

use std::collections::HashMap;

use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::network::ArmsNetwork;

/// Node-link encoding of a transfer network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    /// Always true: transfers are directed seller-to-buyer.
    pub directed: bool,
    /// Always true: parallel edges are preserved.
    pub multigraph: bool,
    /// Graph-level attributes. The builder produces none.
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
}

/// One node of the node-link encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    /// Entity code.
    pub id: String,
}

/// One link of the node-link encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: String,
    pub target: String,
    /// Parallel-edge counter within a source/target pair, in insertion order.
    pub key: usize,
    #[serde(rename = "nrdel")]
    pub delivered: Option<i64>,
    #[serde(rename = "odat")]
    pub order_year: Option<i64>,
    #[serde(rename = "ldat")]
    pub delivery_year: Option<i64>,
    #[serde(rename = "desig2")]
    pub designation: String,
    #[serde(rename = "wcat")]
    pub category: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "tivdel")]
    pub tiv_delivered: Option<f64>,
}

/// Converts a network into its node-link encoding.
pub fn to_node_link(network: &ArmsNetwork) -> NodeLinkGraph {
    let graph = network.graph();
    let nodes = graph
        .node_weights()
        .map(|code| NodeLinkNode { id: code.clone() })
        .collect();

    let mut keys: HashMap<(_, _), usize> = HashMap::new();
    let mut links = Vec::with_capacity(graph.edge_count());
    for edge in graph.edge_references() {
        let key = keys.entry((edge.source(), edge.target())).or_insert(0);
        let attrs = edge.weight();
        links.push(NodeLinkEdge {
            source: graph[edge.source()].clone(),
            target: graph[edge.target()].clone(),
            key: *key,
            delivered: attrs.delivered,
            order_year: attrs.order_year,
            delivery_year: attrs.delivery_year,
            designation: attrs.designation.clone(),
            category: attrs.category.clone(),
            description: attrs.description.clone(),
            tiv_delivered: attrs.tiv_delivered,
        });
        *key += 1;
    }

    NodeLinkGraph {
        directed: true,
        multigraph: true,
        graph: Map::new(),
        nodes,
        links,
    }
}
