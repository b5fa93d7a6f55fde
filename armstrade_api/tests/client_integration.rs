use armstrade_api::{Client, Error, FileType, Query, RegistersQuery, TivQuery};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn trade_registers_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("trade_register.csv");

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.trade_registers(&RegistersQuery::default()).await;
    assert!(result.is_ok());

    let records = result.unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].transfer_id, 41502);
    assert_eq!(records[0].seller_code, "USA");
}

#[tokio::test]
async fn trade_registers_posts_csv_filetype() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("trade_register.csv");

    // The JSON file type is a client-side re-encoding; the wire always says csv.
    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .and(body_string_contains("filetype=csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RegistersQuery::default().with_filetype(FileType::Json);
    let result = client.trade_registers(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn trade_registers_sends_filters() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("trade_register.csv");

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .and(body_string_contains("low_year=2000"))
        .and(body_string_contains("high_year=2015"))
        .and(body_string_contains("seller_country_code=USA"))
        .and(body_string_contains("seller_country_code=RUS"))
        .and(body_string_contains("buyer_country_code=IND"))
        .and(body_string_contains("buyers_or_sellers=sellers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RegistersQuery::default()
        .with_low_year(2000)
        .with_high_year(2015)
        .with_seller("USA")
        .with_seller("RUS")
        .with_buyer("IND")
        .with_order_by(armstrade_api::OrderBy::Sellers);
    let result = client.trade_registers(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn trade_registers_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.trade_registers(&RegistersQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn trade_registers_malformed_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tidn,sellercod\n1,USA,extra\n"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.trade_registers(&RegistersQuery::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn trade_registers_indexed_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("trade_register.csv");

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .trade_registers_indexed(&RegistersQuery::default())
        .await;
    assert!(result.is_ok());

    let indexed = result.unwrap();
    assert_eq!(indexed.len(), 4);

    let row = indexed.get(&41820).unwrap();
    assert_eq!(row.get("sellercod"), Some(&serde_json::json!("DEU")));
    assert_eq!(row.get("odat"), Some(&serde_json::json!(2010)));
    // Empty cells are dropped, and the key column is not repeated in the row.
    assert!(!row.contains_key("nrdel"));
    assert!(!row.contains_key("tivdel"));
    assert!(!row.contains_key("tidn"));
}

#[tokio::test]
async fn tiv_values_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("tiv_values.csv");

    Mock::given(method("POST"))
        .and(path("/export_values.php"))
        .and(body_string_contains("import_or_export=export"))
        .and(body_string_contains("summarize=country"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = TivQuery::default().with_direction(armstrade_api::Direction::Export);
    let result = client.tiv_values(&query).await;
    assert!(result.is_ok());

    let table = result.unwrap();
    assert_eq!(table.columns, vec!["2010", "2011", "2012", "Total"]);
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[0].label, "USA");
    assert_eq!(table.value("USA", "2010"), Some(8641.0));
    assert_eq!(table.value("CHN", "2012"), None);
}

#[tokio::test]
async fn fetch_raw_keeps_rtf_filetype() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export_values.php"))
        .and(body_string_contains("filetype=rtf"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\\rtf1 stub}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = TivQuery::default().with_filetype(FileType::Rtf);
    let result = client.fetch_raw(&query).await;
    assert!(result.is_ok());
    assert!(result.unwrap().starts_with("{\\rtf1"));
}

#[tokio::test]
async fn fetch_raw_rewrites_json_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export_trade_register.php"))
        .and(body_string_contains("filetype=csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tidn\n1\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RegistersQuery::default().with_filetype(FileType::Json);
    let result = client.fetch_raw(&query).await;
    assert!(result.is_ok());
}
