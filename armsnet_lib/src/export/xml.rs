//! GEXF and GraphML writers.

use std::io::Write;

use chrono::Utc;
use petgraph::visit::EdgeRef;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::network::{ArmsNetwork, EdgeAttrs};

/// Edge attributes declared by both XML formats, with their schema types.
const EDGE_ATTRS: &[(&str, &str)] = &[
    ("nrdel", "long"),
    ("odat", "long"),
    ("ldat", "long"),
    ("desig2", "string"),
    ("wcat", "string"),
    ("desc", "string"),
    ("tivdel", "double"),
];

fn attr_value(attrs: &EdgeAttrs, name: &str) -> Option<String> {
    match name {
        "nrdel" => attrs.delivered.map(|v| v.to_string()),
        "odat" => attrs.order_year.map(|v| v.to_string()),
        "ldat" => attrs.delivery_year.map(|v| v.to_string()),
        "desig2" => Some(attrs.designation.clone()),
        "wcat" => Some(attrs.category.clone()),
        "desc" => Some(attrs.description.clone()),
        "tivdel" => attrs.tiv_delivered.map(|v| v.to_string()),
        _ => None,
    }
}

/// Writes the network as GEXF 1.2draft.
///
/// Undefined attributes get no `attvalue` element on their edge.
pub fn write_gexf<W: Write>(network: &ArmsNetwork, sink: &mut W) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut gexf = BytesStart::new("gexf");
    gexf.push_attribute(("xmlns", "http://www.gexf.net/1.2draft"));
    gexf.push_attribute(("version", "1.2"));
    writer.write_event(Event::Start(gexf))?;

    let mut meta = BytesStart::new("meta");
    let today = Utc::now().date_naive().to_string();
    meta.push_attribute(("lastmodifieddate", today.as_str()));
    writer.write_event(Event::Start(meta))?;
    writer.write_event(Event::Start(BytesStart::new("creator")))?;
    writer.write_event(Event::Text(BytesText::new("armsnet")))?;
    writer.write_event(Event::End(BytesEnd::new("creator")))?;
    writer.write_event(Event::End(BytesEnd::new("meta")))?;

    let mut graph_el = BytesStart::new("graph");
    graph_el.push_attribute(("defaultedgetype", "directed"));
    graph_el.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(graph_el))?;

    let mut attributes = BytesStart::new("attributes");
    attributes.push_attribute(("class", "edge"));
    attributes.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(attributes))?;
    for (i, (name, kind)) in EDGE_ATTRS.iter().enumerate() {
        let mut attribute = BytesStart::new("attribute");
        let id = i.to_string();
        attribute.push_attribute(("id", id.as_str()));
        attribute.push_attribute(("title", *name));
        attribute.push_attribute(("type", *kind));
        writer.write_event(Event::Empty(attribute))?;
    }
    writer.write_event(Event::End(BytesEnd::new("attributes")))?;

    let graph = network.graph();

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for code in graph.node_weights() {
        let mut node = BytesStart::new("node");
        node.push_attribute(("id", code.as_str()));
        node.push_attribute(("label", code.as_str()));
        writer.write_event(Event::Empty(node))?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    writer.write_event(Event::Start(BytesStart::new("edges")))?;
    for edge in graph.edge_references() {
        let mut el = BytesStart::new("edge");
        let id = edge.id().index().to_string();
        el.push_attribute(("id", id.as_str()));
        el.push_attribute(("source", graph[edge.source()].as_str()));
        el.push_attribute(("target", graph[edge.target()].as_str()));
        writer.write_event(Event::Start(el))?;

        writer.write_event(Event::Start(BytesStart::new("attvalues")))?;
        for (i, (name, _)) in EDGE_ATTRS.iter().enumerate() {
            if let Some(value) = attr_value(edge.weight(), name) {
                let mut attvalue = BytesStart::new("attvalue");
                let for_id = i.to_string();
                attvalue.push_attribute(("for", for_id.as_str()));
                attvalue.push_attribute(("value", value.as_str()));
                writer.write_event(Event::Empty(attvalue))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("attvalues")))?;
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("edges")))?;

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gexf")))?;
    Ok(())
}

/// Writes the network as GraphML.
///
/// Attribute keys are declared once as `d0..d6`; undefined attributes get
/// no `data` element on their edge.
pub fn write_graphml<W: Write>(
    network: &ArmsNetwork,
    sink: &mut W,
) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut graphml = BytesStart::new("graphml");
    graphml.push_attribute(("xmlns", "http://graphml.graphdrawing.org/xmlns"));
    writer.write_event(Event::Start(graphml))?;

    for (i, (name, kind)) in EDGE_ATTRS.iter().enumerate() {
        let mut key = BytesStart::new("key");
        let id = format!("d{}", i);
        key.push_attribute(("id", id.as_str()));
        key.push_attribute(("for", "edge"));
        key.push_attribute(("attr.name", *name));
        key.push_attribute(("attr.type", *kind));
        writer.write_event(Event::Empty(key))?;
    }

    let mut graph_el = BytesStart::new("graph");
    graph_el.push_attribute(("edgedefault", "directed"));
    writer.write_event(Event::Start(graph_el))?;

    let graph = network.graph();
    for code in graph.node_weights() {
        let mut node = BytesStart::new("node");
        node.push_attribute(("id", code.as_str()));
        writer.write_event(Event::Empty(node))?;
    }

    for edge in graph.edge_references() {
        let mut el = BytesStart::new("edge");
        el.push_attribute(("source", graph[edge.source()].as_str()));
        el.push_attribute(("target", graph[edge.target()].as_str()));
        writer.write_event(Event::Start(el))?;
        for (i, (name, _)) in EDGE_ATTRS.iter().enumerate() {
            if let Some(value) = attr_value(edge.weight(), name) {
                let mut data = BytesStart::new("data");
                let key_id = format!("d{}", i);
                data.push_attribute(("key", key_id.as_str()));
                writer.write_event(Event::Start(data))?;
                writer.write_event(Event::Text(BytesText::new(&value)))?;
                writer.write_event(Event::End(BytesEnd::new("data")))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("graphml")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::network::{build_network, ArmsNetwork, EdgeAttrs, TransferEdge};

    use super::*;

    fn assert_xml_parseable(xml: &str) {
        use quick_xml::Reader;

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Err(e) => panic!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                ),
                _ => {}
            }
        }
    }

    fn sample_network() -> ArmsNetwork {
        build_network(vec![
            TransferEdge {
                seller: "USA".to_string(),
                buyer: "IND".to_string(),
                attrs: EdgeAttrs {
                    delivered: Some(4),
                    order_year: Some(2008),
                    delivery_year: Some(2010),
                    designation: "C-130J Hercules".to_string(),
                    category: "Aircraft".to_string(),
                    description: "transport aircraft".to_string(),
                    tiv_delivered: Some(220.0),
                },
            },
            TransferEdge {
                seller: "USA".to_string(),
                buyer: "IND".to_string(),
                attrs: EdgeAttrs {
                    delivered: None,
                    order_year: None,
                    delivery_year: None,
                    designation: "AT&T <radar>".to_string(),
                    category: "Sensors".to_string(),
                    description: "air search radar".to_string(),
                    tiv_delivered: None,
                },
            },
        ])
    }

    #[test]
    fn test_gexf_wellformed() {
        let mut out = Vec::new();
        write_gexf(&sample_network(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<gexf"));
        assert!(xml.contains("defaultedgetype=\"directed\""));
        assert!(xml.contains("lastmodifieddate"));
        assert!(xml.contains("<node id=\"USA\" label=\"USA\"/>"));
        assert!(xml.contains("<attvalue for=\"0\" value=\"4\"/>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_gexf_omits_undefined_attvalues() {
        let mut out = Vec::new();
        write_gexf(&sample_network(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        // The second edge has no nrdel/odat/ldat/tivdel, so "4" appears once
        // and the radar edge carries only string attributes.
        assert_eq!(xml.matches("for=\"0\"").count(), 1);
        assert_eq!(xml.matches("for=\"6\"").count(), 1);
        assert_eq!(xml.matches("for=\"3\"").count(), 2);
    }

    #[test]
    fn test_gexf_escapes_special_chars() {
        let mut out = Vec::new();
        write_gexf(&sample_network(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        assert!(xml.contains("AT&amp;T"));
        assert!(!xml.contains("<radar>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_gexf_empty_network() {
        let mut out = Vec::new();
        write_gexf(&ArmsNetwork::new(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("<nodes>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_graphml_wellformed() {
        let mut out = Vec::new();
        write_graphml(&sample_network(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("graphml.graphdrawing.org"));
        assert!(xml.contains("<key id=\"d0\" for=\"edge\" attr.name=\"nrdel\" attr.type=\"long\"/>"));
        assert!(xml.contains("<node id=\"USA\"/>"));
        assert!(xml.contains("<data key=\"d0\">4</data>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_graphml_omits_undefined_data() {
        let mut out = Vec::new();
        write_graphml(&sample_network(), &mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();

        assert_eq!(xml.matches("<data key=\"d0\">").count(), 1);
        assert_eq!(xml.matches("<data key=\"d6\">").count(), 1);
        assert_eq!(xml.matches("<data key=\"d4\">").count(), 2);
    }
}
