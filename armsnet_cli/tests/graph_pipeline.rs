use std::path::{Path, PathBuf};

use armsnet_lib::armstrade_api::parse_trade_registers;
use armsnet_lib::{extract_network, GraphFormat};
use serde_json::Value;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_register_fixture() -> String {
    let path = workspace_root().join("armstrade_api/tests/fixtures/trade_register.csv");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Fixture CSV through expansion and assembly
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_builds_expected_network() {
    let records = parse_trade_registers(&load_register_fixture()).expect("fixture parses");
    let network = extract_network(&records).expect("fixture expands");

    // Two three-year ranges, one single year, one record with no delivery
    // years at all.
    assert_eq!(network.node_count(), 7);
    assert_eq!(network.edge_count(), 8);
}

// ---------------------------------------------------------------------------
// Every format produces a non-empty file on disk
// ---------------------------------------------------------------------------

#[test]
fn test_all_formats_write_nonempty_files() {
    let records = parse_trade_registers(&load_register_fixture()).expect("fixture parses");
    let network = extract_network(&records).expect("fixture expands");
    let dir = tempfile::tempdir().expect("tempdir");

    let formats = [
        GraphFormat::Gexf,
        GraphFormat::Json,
        GraphFormat::Binary,
        GraphFormat::Pajek,
        GraphFormat::Yaml,
        GraphFormat::Gml,
        GraphFormat::GraphMl,
    ];
    for format in formats {
        let path = dir.path().join(format!("net.{}", format.extension()));
        armsnet_lib::write_network(&network, &path, format)
            .unwrap_or_else(|e| panic!("{format} write failed: {e}"));
        let len = std::fs::metadata(&path).expect("output file exists").len();
        assert!(len > 0, "{format} output should not be empty");
    }
}

// ---------------------------------------------------------------------------
// The JSON artifact carries the node-link shape downstream tools read
// ---------------------------------------------------------------------------

#[test]
fn test_json_artifact_has_node_link_shape() {
    let records = parse_trade_registers(&load_register_fixture()).expect("fixture parses");
    let network = extract_network(&records).expect("fixture expands");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("net.json");

    armsnet_lib::write_network(&network, &path, GraphFormat::Json).expect("json write");

    let text = std::fs::read_to_string(&path).expect("read json back");
    let value: Value = serde_json::from_str(&text).expect("output is valid JSON");

    assert_eq!(value["directed"], Value::Bool(true));
    assert_eq!(value["multigraph"], Value::Bool(true));
    assert_eq!(value["nodes"].as_array().expect("nodes array").len(), 7);
    assert_eq!(value["links"].as_array().expect("links array").len(), 8);

    let first = &value["links"][0];
    assert_eq!(first["source"], Value::String("USA".to_string()));
    assert_eq!(first["target"], Value::String("IND".to_string()));
    assert_eq!(first["key"], Value::Number(0.into()));
}
