use anyhow::Result;
use armsnet_lib::types::{TivTable, TransferRecord};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct TransferRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    transfer_id: i64,
    #[tabled(rename = "Seller")]
    #[serde(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Buyer")]
    #[serde(rename = "Buyer")]
    buyer: String,
    #[tabled(rename = "Ordered")]
    #[serde(rename = "Ordered")]
    ordered: String,
    #[tabled(rename = "Units")]
    #[serde(rename = "Units")]
    units: String,
    #[tabled(rename = "Years")]
    #[serde(rename = "Years")]
    years: String,
    #[tabled(rename = "Designation")]
    #[serde(rename = "Designation")]
    designation: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "TIV")]
    #[serde(rename = "TIV")]
    tiv: String,
}

// -- Row builders --

fn build_transfer_rows(records: &[TransferRecord]) -> Vec<TransferRow> {
    records
        .iter()
        .map(|r| TransferRow {
            transfer_id: r.transfer_id,
            seller: r.seller_code.clone(),
            buyer: r.buyer_code.clone(),
            ordered: format_year(r.order_year),
            units: r.delivered.map(|v| v.to_string()).unwrap_or_default(),
            years: r
                .delivery_years
                .clone()
                .unwrap_or_else(|| format_year(r.delivery_year)),
            designation: r.designation.clone(),
            category: r.category.clone(),
            tiv: format_tiv(r.tiv_delivered),
        })
        .collect()
}

fn tiv_builder(table: &TivTable) -> Builder {
    let mut builder = Builder::default();
    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(String::new());
    header.extend(table.columns.iter().cloned());
    builder.push_record(header);
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.values.len() + 1);
        cells.push(row.label.clone());
        cells.extend(row.values.iter().map(|v| format_tiv(*v)));
        builder.push_record(cells);
    }
    builder
}

// -- Table output --

pub fn print_transfers_table(records: &[TransferRecord]) {
    println!("{}", Table::new(build_transfer_rows(records)));
}

pub fn print_tiv_table(table: &TivTable) {
    println!("{}", tiv_builder(table).build());
}

// -- Markdown output --

pub fn print_transfers_markdown(records: &[TransferRecord]) {
    let mut table = Table::new(build_transfer_rows(records));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_tiv_markdown(table: &TivTable) {
    let mut rendered = tiv_builder(table).build();
    rendered.with(Style::markdown());
    println!("{}", rendered);
}

// -- CSV output --

pub fn print_transfers_csv(records: &[TransferRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_transfer_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_tiv_csv(table: &TivTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    let mut header = vec![String::new()];
    header.extend(table.columns.iter().cloned());
    wtr.write_record(&header)?;
    for row in &table.rows {
        let mut cells = vec![row.label.clone()];
        cells.extend(
            row.values
                .iter()
                .map(|v| v.map(|x| x.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&cells)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_year(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn format_tiv(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}
