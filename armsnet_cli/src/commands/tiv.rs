//! The `tiv` subcommand: fetches trend-indicator value tables.

use anyhow::Result;
use armsnet_lib::validation;
use armsnet_lib::{Client, Direction, Query, SummarizeBy, TivQuery};
use clap::Args;

use crate::output::{print_json, print_tiv_csv, print_tiv_markdown, print_tiv_table, OutputFormat};

#[derive(Args)]
pub struct TivArgs {
    /// First year of the export window
    #[arg(long)]
    pub low_year: Option<i64>,

    /// Last year of the export window
    #[arg(long)]
    pub high_year: Option<i64>,

    /// Filter by entity code (comma-separated, e.g. USA,RUS)
    #[arg(long)]
    pub country: Option<String>,

    /// Transfer direction: import, export
    #[arg(long, default_value = "import")]
    pub direction: String,

    /// Summarize rows by: country, year
    #[arg(long, default_value = "country")]
    pub summarize: String,
}

/// Builds a validated query from the CLI flags.
pub(crate) fn build_query(args: &TivArgs) -> Result<TivQuery> {
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

    let mut query = TivQuery::default();
    if let Some(year) = low {
        query = query.with_low_year(year);
    }
    if let Some(year) = high {
        query = query.with_high_year(year);
    }

    if let Some(ref val) = args.country {
        let mut countries = Vec::new();
        for item in val.split(',') {
            countries.push(validation::validate_entity(item)?);
        }
        query = query.with_countries(&countries);
    }

    let direction = match args.direction.as_str() {
        "export" => Direction::Export,
        _ => Direction::Import,
    };
    query = query.with_direction(direction);

    let summarize = match args.summarize.as_str() {
        "year" => SummarizeBy::Year,
        _ => SummarizeBy::Country,
    };
    query = query.with_summarize(summarize);

    Ok(query)
}

pub async fn run(args: &TivArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let table = client.tiv_values(&query).await?;

    eprintln!("{} rows, {} value columns", table.rows.len(), table.columns.len());

    match format {
        OutputFormat::Table => print_tiv_table(&table),
        OutputFormat::Json => print_json(&table),
        OutputFormat::Csv => print_tiv_csv(&table)?,
        OutputFormat::Markdown => print_tiv_markdown(&table),
    }

    Ok(())
}
