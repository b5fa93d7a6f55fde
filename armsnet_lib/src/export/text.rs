//! Pajek and GML writers.

use std::collections::HashMap;
use std::io::Write;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::network::ArmsNetwork;

/// Writes the network in Pajek NET format.
///
/// Vertices are numbered from 1 in insertion order. Edges carry no weight
/// attribute, so every arc is written with weight 1.0.
pub fn write_pajek<W: Write>(network: &ArmsNetwork, writer: &mut W) -> std::io::Result<()> {
    let graph = network.graph();

    writeln!(writer, "*vertices {}", graph.node_count())?;
    for index in graph.node_indices() {
        writeln!(writer, "{} \"{}\"", index.index() + 1, graph[index])?;
    }

    writeln!(writer, "*arcs")?;
    for edge in graph.edge_references() {
        writeln!(
            writer,
            "{} {} 1.0",
            edge.source().index() + 1,
            edge.target().index() + 1
        )?;
    }
    Ok(())
}

/// Writes the network as GML.
///
/// Node ids are 0-based insertion indices with the entity code as label.
/// Edges carry a per-pair key so parallel edges stay distinguishable, and
/// undefined attributes are omitted from the edge blocks.
pub fn write_gml<W: Write>(network: &ArmsNetwork, writer: &mut W) -> std::io::Result<()> {
    let graph = network.graph();

    writeln!(writer, "graph [")?;
    writeln!(writer, "  directed 1")?;
    writeln!(writer, "  multigraph 1")?;
    for index in graph.node_indices() {
        writeln!(writer, "  node [")?;
        writeln!(writer, "    id {}", index.index())?;
        writeln!(writer, "    label {}", gml_string(&graph[index]))?;
        writeln!(writer, "  ]")?;
    }

    let mut keys: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();
    for edge in graph.edge_references() {
        let key = keys.entry((edge.source(), edge.target())).or_insert(0);
        let attrs = edge.weight();
        writeln!(writer, "  edge [")?;
        writeln!(writer, "    source {}", edge.source().index())?;
        writeln!(writer, "    target {}", edge.target().index())?;
        writeln!(writer, "    key {}", key)?;
        if let Some(delivered) = attrs.delivered {
            writeln!(writer, "    nrdel {}", delivered)?;
        }
        if let Some(order_year) = attrs.order_year {
            writeln!(writer, "    odat {}", order_year)?;
        }
        if let Some(delivery_year) = attrs.delivery_year {
            writeln!(writer, "    ldat {}", delivery_year)?;
        }
        writeln!(writer, "    desig2 {}", gml_string(&attrs.designation))?;
        writeln!(writer, "    wcat {}", gml_string(&attrs.category))?;
        writeln!(writer, "    desc {}", gml_string(&attrs.description))?;
        if let Some(tiv) = attrs.tiv_delivered {
            writeln!(writer, "    tivdel {}", gml_float(tiv))?;
        }
        writeln!(writer, "  ]")?;
        *key += 1;
    }
    writeln!(writer, "]")?;
    Ok(())
}

/// Quotes and escapes a GML string value.
fn gml_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Formats a float so GML readers see a decimal point.
fn gml_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{build_network, EdgeAttrs, TransferEdge};

    use super::*;

    fn edge(seller: &str, buyer: &str, tiv: Option<f64>) -> TransferEdge {
        TransferEdge {
            seller: seller.to_string(),
            buyer: buyer.to_string(),
            attrs: EdgeAttrs {
                delivered: Some(3),
                order_year: Some(2008),
                delivery_year: Some(2010),
                designation: "Mi-17".to_string(),
                category: "Aircraft".to_string(),
                description: "transport helicopter".to_string(),
                tiv_delivered: tiv,
            },
        }
    }

    #[test]
    fn test_pajek_output() {
        let network = build_network(vec![
            edge("USA", "IND", Some(9.9)),
            edge("RUS", "IND", None),
            edge("USA", "IND", None),
        ]);
        let mut out = Vec::new();
        write_pajek(&network, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "*vertices 3\n\
                        1 \"USA\"\n\
                        2 \"IND\"\n\
                        3 \"RUS\"\n\
                        *arcs\n\
                        1 2 1.0\n\
                        3 2 1.0\n\
                        1 2 1.0\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_gml_output() {
        let network = build_network(vec![edge("USA", "IND", Some(16.5))]);
        let mut out = Vec::new();
        write_gml(&network, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("graph [\n  directed 1\n  multigraph 1\n"));
        assert!(text.contains("  node [\n    id 0\n    label \"USA\"\n  ]\n"));
        assert!(text.contains("    source 0\n    target 1\n    key 0\n"));
        assert!(text.contains("    nrdel 3\n"));
        assert!(text.contains("    desig2 \"Mi-17\"\n"));
        assert!(text.contains("    tivdel 16.5\n"));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_gml_omits_undefined_attrs() {
        let network = build_network(vec![edge("USA", "IND", None)]);
        let mut out = Vec::new();
        write_gml(&network, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("tivdel"));
        assert!(text.contains("nrdel 3"));
    }

    #[test]
    fn test_gml_keys_count_parallel_edges() {
        let network = build_network(vec![
            edge("USA", "IND", None),
            edge("USA", "IND", None),
            edge("RUS", "IND", None),
        ]);
        let mut out = Vec::new();
        write_gml(&network, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("key 0").count(), 2);
        assert_eq!(text.matches("key 1").count(), 1);
    }

    #[test]
    fn test_gml_escapes_quotes() {
        let mut e = edge("USA", "IND", None);
        e.attrs.description = "a \"quoted\" phrase".to_string();
        let network = build_network(vec![e]);
        let mut out = Vec::new();
        write_gml(&network, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("desc \"a \\\"quoted\\\" phrase\""));
    }

    #[test]
    fn test_gml_floats_keep_decimal_point() {
        assert_eq!(gml_float(550.0), "550.0");
        assert_eq!(gml_float(16.5), "16.5");
        assert_eq!(gml_float(0.0), "0.0");
    }
}
