//! Transfer-to-edge expansion and multigraph assembly.
//!
//! A trade-register row describes a whole transfer, which may span several
//! delivery years. This module splits such rows into one edge per year and
//! assembles the edges into a directed multigraph of seller/buyer links.
//! The per-year split is an even division of units, not a reconstruction of
//! the real delivery schedule.

use std::collections::HashMap;

use armstrade_api::types::TransferRecord;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::error::ArmsNetError;

/// Attributes carried by one edge: the slice of a transfer delivered in a
/// single year. Field renames follow the export's CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    /// Units delivered in this edge's year.
    #[serde(rename = "nrdel")]
    pub delivered: Option<i64>,
    /// Year the order was placed.
    #[serde(rename = "odat")]
    pub order_year: Option<i64>,
    /// Delivery year of this edge.
    #[serde(rename = "ldat")]
    pub delivery_year: Option<i64>,
    #[serde(rename = "desig2")]
    pub designation: String,
    #[serde(rename = "wcat")]
    pub category: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Trend-indicator value delivered in this edge's year.
    #[serde(rename = "tivdel")]
    pub tiv_delivered: Option<f64>,
}

/// One edge of the transfer network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEdge {
    pub seller: String,
    pub buyer: String,
    pub attrs: EdgeAttrs,
}

/// Expands one transfer record into per-year edges.
///
/// A `delyears` field of the form `"start-end"` produces one edge per year
/// in the inclusive range: units are divided evenly with the whole
/// remainder going to the first year, and each year's value is recomputed
/// as that year's units times the record's per-unit value. Any other
/// `delyears` value produces a single edge with the record's fields
/// unchanged. A record with no unit count is expanded through the same
/// path as if zero units were delivered.
pub fn transfer_edges(record: &TransferRecord) -> Result<Vec<TransferEdge>, ArmsNetError> {
    let attrs = EdgeAttrs {
        delivered: record.delivered,
        order_year: record.order_year,
        delivery_year: record.delivery_year,
        designation: record.designation.clone(),
        category: record.category.clone(),
        description: record.description.clone(),
        tiv_delivered: record.tiv_delivered,
    };

    let years = match record.delivery_years.as_deref() {
        Some(raw) if raw.contains('-') => delivery_year_span(raw)?,
        _ => {
            return Ok(vec![TransferEdge {
                seller: record.seller_code.clone(),
                buyer: record.buyer_code.clone(),
                attrs,
            }]);
        }
    };

    let span = years.len() as i64;
    let delivered = record.delivered.unwrap_or(0);
    let per_year = delivered / span;
    let remainder = delivered % span;

    let mut edges = Vec::with_capacity(years.len());
    for (i, year) in years.into_iter().enumerate() {
        let units = per_year + if i == 0 { remainder } else { 0 };
        let mut attrs = attrs.clone();
        attrs.delivered = Some(units);
        attrs.delivery_year = Some(year);
        attrs.tiv_delivered = record.tiv_per_unit.map(|unit| units as f64 * unit);
        edges.push(TransferEdge {
            seller: record.seller_code.clone(),
            buyer: record.buyer_code.clone(),
            attrs,
        });
    }

    Ok(edges)
}

/// Parses a `"start-end"` delivery-year range into the years it covers.
fn delivery_year_span(raw: &str) -> Result<Vec<i64>, ArmsNetError> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 2 {
        return Err(ArmsNetError::YearRange(format!(
            "expected \"start-end\", got {:?}",
            raw
        )));
    }
    let parse = |part: &str| {
        part.trim().parse::<i64>().map_err(|_| {
            ArmsNetError::YearRange(format!("non-numeric year {:?} in {:?}", part.trim(), raw))
        })
    };
    let start = parse(parts[0])?;
    let end = parse(parts[1])?;
    if start > end {
        return Err(ArmsNetError::YearRange(format!(
            "start year {} is after end year {} in {:?}",
            start, end, raw
        )));
    }
    Ok((start..=end).collect())
}

/// Directed multigraph of arms transfers between entities.
///
/// Nodes are entity codes, interned on first use. Parallel edges between
/// the same pair are kept, one per transfer per delivery year, and never
/// merged. Edge order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct ArmsNetwork {
    graph: DiGraph<String, EdgeAttrs>,
    nodes: HashMap<String, NodeIndex>,
}

impl ArmsNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge, interning its endpoint codes as nodes.
    pub fn add_edge(&mut self, edge: TransferEdge) {
        let seller = self.intern(&edge.seller);
        let buyer = self.intern(&edge.buyer);
        self.graph.add_edge(seller, buyer, edge.attrs);
    }

    fn intern(&mut self, code: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(code) {
            return index;
        }
        let index = self.graph.add_node(code.to_string());
        self.nodes.insert(code.to_string(), index);
        index
    }

    /// Number of entities in the network.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node index of an entity code, if the entity is in the network.
    pub fn node(&self, code: &str) -> Option<NodeIndex> {
        self.nodes.get(code).copied()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DiGraph<String, EdgeAttrs> {
        &self.graph
    }
}

/// Assembles edges into a directed multigraph, in input order.
pub fn build_network(edges: Vec<TransferEdge>) -> ArmsNetwork {
    let mut network = ArmsNetwork::new();
    for edge in edges {
        network.add_edge(edge);
    }
    network
}

/// Expands records into per-year edges and assembles them into a network.
pub fn extract_network(records: &[TransferRecord]) -> Result<ArmsNetwork, ArmsNetError> {
    let mut network = ArmsNetwork::new();
    for record in records {
        for edge in transfer_edges(record)? {
            network.add_edge(edge);
        }
    }
    tracing::debug!(
        "expanded {} records into {} edges across {} entities",
        records.len(),
        network.edge_count(),
        network.node_count()
    );
    Ok(network)
}
