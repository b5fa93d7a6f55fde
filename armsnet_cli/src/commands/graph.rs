//! The `graph` subcommand: builds a transfer network and writes it to disk
//! in one of the supported graph formats.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use armsnet_lib::armstrade_api::parse_trade_registers;
use armsnet_lib::{build_network, transfer_edges, Client, GraphFormat};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::registers::{build_query, RegistersArgs};

#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub registers: RegistersArgs,

    /// Build the network from a local trade-register CSV instead of fetching
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path
    #[arg(long)]
    pub out: PathBuf,

    /// Graph format: gexf, json, binary, pajek, yaml, gml, graphml
    #[arg(long, default_value = "gexf")]
    pub format: String,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub async fn run(args: &GraphArgs, client: &Client) -> Result<()> {
    let format = args.format.parse::<GraphFormat>()?;

    let records = match args.input {
        Some(ref path) => {
            let csv = fs::read_to_string(path)?;
            parse_trade_registers(&csv)?
        }
        None => {
            let query = build_query(&args.registers)?;
            client.trade_registers(&query).await?
        }
    };
    if records.is_empty() {
        bail!("no transfer records to build a network from");
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(records.len() as u64)
    };
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        )
        .unwrap(),
    );
    pb.set_message("expanding deliveries...");

    let mut edges = Vec::new();
    for record in &records {
        edges.extend(transfer_edges(record)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let network = build_network(edges);
    armsnet_lib::write_network(&network, &args.out, format)?;

    eprintln!(
        "{} entities, {} edges written to {}",
        network.node_count(),
        network.edge_count(),
        args.out.display()
    );

    Ok(())
}
