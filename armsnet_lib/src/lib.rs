//! Network layer for the SIPRI Arms Transfers Database: per-year edge
//! expansion, multigraph assembly, and graph serialization.
//!
//! Wraps the `armstrade_api` export client and turns trade-register records
//! into a directed multigraph of seller/buyer links that can be written to
//! several graph interchange formats.

pub mod error;
pub mod export;
pub mod network;
pub mod validation;

pub use armstrade_api;
pub use armstrade_api::types;
pub use armstrade_api::{
    Client, Direction, Endpoint, FileType, OrderBy, Query, QueryCommon, RegistersQuery,
    SummarizeBy, TivQuery,
};

pub use error::ArmsNetError;
pub use export::{to_node_link, write_network, write_to, GraphFormat, NodeLinkGraph};
pub use network::{
    build_network, extract_network, transfer_edges, ArmsNetwork, EdgeAttrs, TransferEdge,
};
