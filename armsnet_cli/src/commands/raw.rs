//! The `raw` subcommand: fetches an export body without decoding it.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use armsnet_lib::validation;
use armsnet_lib::{Client, Endpoint, FileType, Query, RegistersQuery, TivQuery};
use clap::Args;

#[derive(Args)]
pub struct RawArgs {
    /// Endpoint to fetch: registers, tiv
    #[arg(long, default_value = "registers")]
    pub endpoint: String,

    /// Export file type: csv, rtf, json
    #[arg(long, default_value = "csv")]
    pub filetype: String,

    /// First year of the export window
    #[arg(long)]
    pub low_year: Option<i64>,

    /// Last year of the export window
    #[arg(long)]
    pub high_year: Option<i64>,

    /// Write the body to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn configure<Q: Query>(query: Q, low: Option<i64>, high: Option<i64>, filetype: FileType) -> Q {
    let mut query = query.with_filetype(filetype);
    if let Some(year) = low {
        query = query.with_low_year(year);
    }
    if let Some(year) = high {
        query = query.with_high_year(year);
    }
    query
}

pub async fn run(args: &RawArgs, client: &Client) -> Result<()> {
    let filetype = args.filetype.parse::<FileType>().map_err(|_| {
        anyhow!(
            "unknown file type: {:?} (expected csv, rtf, or json)",
            args.filetype
        )
    })?;

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

    let body = match Endpoint::from_name(&args.endpoint) {
        Endpoint::Registers => {
            let query = configure(RegistersQuery::default(), low, high, filetype);
            client.fetch_raw(&query).await?
        }
        Endpoint::Tiv => {
            let query = configure(TivQuery::default(), low, high, filetype);
            client.fetch_raw(&query).await?
        }
    };

    match args.out {
        Some(ref path) => {
            fs::write(path, &body)?;
            eprintln!("{} bytes written to {}", body.len(), path.display());
        }
        None => {
            io::stdout().write_all(body.as_bytes())?;
        }
    }

    Ok(())
}
