//! # jobviz entry point
//!
//! With no subcommand the dashboard window opens; `charts` and `columns` run
//! the same pipeline headless and print to stdout.
//!
//! ```bash
//! jobviz --data data/processed/cleaned_job_postings.csv
//! jobviz charts --min-salary 30000 --job-type Full-time --state CA --state NY
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // CLI subcommands report on stdout

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use jobviz::dashboard::logic::Dataset;
use std::sync::Arc;

fn main() -> Result<()> {
    // Set RUST_LOG=debug to see every dispatch
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    let config = jobviz::config::resolve(cli.config.as_deref(), cli.data.as_deref())?;

    if let Some(command) = cli.command {
        return cli::run_command(command, &config);
    }

    // A missing or malformed dataset aborts startup.
    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;
    jobviz::dashboard::gui::run(Arc::new(dataset), &config)
}
