use anyhow::{Context, Result};
use clap::Parser;
use keyfilter::{cli::Cli, filter, input::Document};
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_document(args: &Cli) -> Result<Document> {
    match args.input_path() {
        Some(path) => Document::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Document::from_reader(io::stdin().lock()).context("Failed to load stdin"),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let document = load_document(&args)?;
    let (filtered, report) = filter::into_valid_keys_with_report(document.into_entries());

    // Sorted keys keep the output stable across runs
    let sorted: BTreeMap<String, serde_json::Value> = filtered.into_iter().collect();

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&sorted)?
    } else {
        serde_json::to_string(&sorted)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    if args.report {
        eprintln!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
