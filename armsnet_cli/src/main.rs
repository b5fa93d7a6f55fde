mod commands;
mod output;

use anyhow::Result;
use armsnet_lib::Client;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "armsnet")]
#[command(about = "Query the SIPRI Arms Transfers Database and build transfer networks")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the trade register
    Registers(commands::registers::RegistersArgs),
    /// Query the trend-indicator-value tables
    Tiv(commands::tiv::TivArgs),
    /// Build a transfer network and write it to a graph file
    Graph(commands::graph::GraphArgs),
    /// Fetch an undecoded export body
    Raw(commands::raw::RawArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("armsnet=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::new();

    match &cli.command {
        Commands::Registers(args) => commands::registers::run(args, &client, &format).await?,
        Commands::Tiv(args) => commands::tiv::run(args, &client, &format).await?,
        Commands::Graph(args) => commands::graph::run(args, &client).await?,
        Commands::Raw(args) => commands::raw::run(args, &client).await?,
    }

    Ok(())
}
