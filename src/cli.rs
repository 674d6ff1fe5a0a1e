//! CLI argument parsing for keyfilter

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keyfilter")]
#[command(version)]
#[command(about = "Drop entries with absent or empty keys from a JSON mapping", long_about = None)]
pub struct Cli {
    /// Input document: a JSON array of [key, value] pairs or a JSON object ("-" reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Pretty-print the filtered object
    #[arg(short, long)]
    pub pretty: bool,

    /// Print a JSON report of retained and dropped entries to stderr
    #[arg(short, long)]
    pub report: bool,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Input path, or None when reading stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
