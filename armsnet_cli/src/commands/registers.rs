//! The `registers` subcommand: lists individual arms transfers from the
//! trade-register export.

use anyhow::{anyhow, Result};
use armsnet_lib::types::ArmsCategory;
use armsnet_lib::validation;
use armsnet_lib::{Client, OrderBy, Query, RegistersQuery};
use clap::Args;

use crate::output::{
    print_json, print_transfers_csv, print_transfers_markdown, print_transfers_table, OutputFormat,
};

/// Arguments for the `registers` subcommand.
///
/// Supplier and recipient filters accept comma-separated entity codes. The
/// delivery-year window defaults to 1950 through the current year.
#[derive(Args)]
pub struct RegistersArgs {
    /// First delivery year of the export window
    #[arg(long)]
    pub low_year: Option<i64>,

    /// Last delivery year of the export window
    #[arg(long)]
    pub high_year: Option<i64>,

    /// Filter by supplier entity code (comma-separated, e.g. USA,FRA)
    #[arg(long)]
    pub seller: Option<String>,

    /// Filter by recipient entity code (comma-separated, e.g. IND,EGY)
    #[arg(long)]
    pub buyer: Option<String>,

    /// Armament category: any, aircraft, armoured-vehicles, missiles, ships, ...
    #[arg(long, default_value = "any")]
    pub category: String,

    /// Group the export by: buyers, sellers
    #[arg(long, default_value = "buyers")]
    pub order_by: String,
}

/// Builds a validated query from the CLI flags.
pub(crate) fn build_query(args: &RegistersArgs) -> Result<RegistersQuery> {
    let low = args
        .low_year
        .map(validation::validate_year)
        .transpose()?;
    let high = args
        .high_year
        .map(validation::validate_year)
        .transpose()?;
    if let (Some(l), Some(h)) = (low, high) {
        validation::validate_year_window(l, h)?;
    }

    let mut query = RegistersQuery::default();
    if let Some(year) = low {
        query = query.with_low_year(year);
    }
    if let Some(year) = high {
        query = query.with_high_year(year);
    }

    if let Some(ref val) = args.seller {
        let mut sellers = Vec::new();
        for item in val.split(',') {
            sellers.push(validation::validate_entity(item)?);
        }
        query = query.with_sellers(&sellers);
    }

    if let Some(ref val) = args.buyer {
        let mut buyers = Vec::new();
        for item in val.split(',') {
            buyers.push(validation::validate_entity(item)?);
        }
        query = query.with_buyers(&buyers);
    }

    let category = args
        .category
        .parse::<ArmsCategory>()
        .map_err(|_| anyhow!("unknown armament category: {:?}", args.category))?;
    query = query.with_category(category);

    let order_by = match args.order_by.as_str() {
        "sellers" => OrderBy::Sellers,
        _ => OrderBy::Buyers,
    };
    query = query.with_order_by(order_by);

    Ok(query)
}

pub async fn run(args: &RegistersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let records = client.trade_registers(&query).await?;

    eprintln!("{} transfers", records.len());

    match format {
        OutputFormat::Table => print_transfers_table(&records),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => print_transfers_csv(&records)?,
        OutputFormat::Markdown => print_transfers_markdown(&records),
    }

    Ok(())
}
