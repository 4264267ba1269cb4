use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ratewatch::data::analyse;
use ratewatch::report::{render, ReportMeta};
use ratewatch::source::load_export;
use ratewatch_types::RateUnit;

#[derive(Parser, Debug)]
#[command(name = "ratewatch")]
#[command(about = "Analyses the file's metrics to generate a report")]
struct Args {
    /// The location of the file containing the metrics to analyse
    #[arg(long, default_value = "resources/fixtures/1.json")]
    path_to_file: PathBuf,

    /// The symbol representing the unit of the metrics in the file - i.e: B, Mbit
    #[arg(long, default_value = "B")]
    input_unit_symbol: String,

    /// The symbol representing the desired unit of the metrics summary output - i.e: B, Mbit
    #[arg(long, default_value = "Mbit")]
    output_unit_symbol: String,

    /// Write the analysis as JSON to this path instead of printing the report
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if !args.path_to_file.is_file() {
        bail!("Invalid path to metrics file. Please make sure this directory exists and has readable permissions.");
    }

    let input_unit = RateUnit::new(&args.input_unit_symbol);
    let output_unit = RateUnit::new(&args.output_unit_symbol);
    if !input_unit.is_valid() || !output_unit.is_valid() {
        bail!("Invalid units. Please make sure the unit symbols for both input and output metrics are correct.");
    }

    let series = load_export(&args.path_to_file)?;
    debug!(
        samples = series.len(),
        input = %input_unit.symbol(),
        output = %output_unit.symbol(),
        "analysing metrics export"
    );

    let report = analyse(&series, input_unit.symbol(), output_unit.symbol())?;

    // Export mode: write the raw analysis as JSON and skip the text report.
    if let Some(export_path) = args.export {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&export_path, json)
            .with_context(|| format!("Failed to write analysis to {}", export_path.display()))?;
        println!("Exported analysis to: {}", export_path.display());
        return Ok(());
    }

    let meta = ReportMeta::from_env()?;
    let text = render(&meta, &series, &output_unit.display_name()?, &report)?;
    println!("{text}");

    Ok(())
}
