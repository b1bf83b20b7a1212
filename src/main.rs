#![forbid(unsafe_code)]

mod args;

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use env_logger::Env;
use flow_tagger::{load_lookup_table, process_flow_logs, write_results};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let mut lookup_file = File::open(&args.lookup)
        .with_context(|| format!("opening lookup table {}", args.lookup.display()))?;
    let lookup = load_lookup_table(&mut lookup_file)?;

    let mut flow_log_file = File::open(&args.flow_logs)
        .with_context(|| format!("opening flow log {}", args.flow_logs.display()))?;
    let summary = process_flow_logs(&mut flow_log_file, &lookup)?;

    let output_file = File::create(&args.output)
        .with_context(|| format!("creating report {}", args.output.display()))?;
    let mut output = BufWriter::new(output_file);
    write_results(&mut output, &summary)?;
    output
        .flush()
        .with_context(|| format!("writing report {}", args.output.display()))?;

    println!(
        "Processing complete! Results written to {}.",
        args.output.display()
    );
    Ok(())
}
