use clap::Parser;
use std::path::PathBuf;

/// Classifies flow log records by destination port and protocol using a
/// lookup table, then writes aggregate counts to a report file.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// CSV lookup table with a header row and port,protocol,tag rows
    #[clap(long, default_value = "lookup.csv")]
    pub lookup: PathBuf,

    /// Flow log file, one whitespace-delimited record per line
    #[clap(long, default_value = "flow_logs.txt")]
    pub flow_logs: PathBuf,

    /// Destination for the summary report
    #[clap(long, default_value = "output.csv")]
    pub output: PathBuf,
}
