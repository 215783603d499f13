//! sinkql CLI
//!
//! Command-line tool for rendering connector SQL.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sinkql_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    for line in run(&cli)? {
        println!("{line}");
    }

    Ok(())
}
