//! `license-listr` — run an external license checker, capture its table,
//! and export a package-name → license JSON mapping.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Run the checker command and capture its stdout ([`runner`]).
//! 3. Echo the capture and persist it verbatim ([`report::write_raw`]).
//! 4. Parse the box-drawing table into package/license pairs ([`parser`]).
//! 5. Write the JSON mapping and print the summary ([`report`]).
//! 6. Exit `0`; subprocess and file I/O failures are fatal and propagate.

mod cli;
mod error;
mod models;
mod parser;
mod report;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (program, args) = cli
        .command
        .split_first()
        .context("no checker command given")?;

    let captured = runner::capture_output(program, args).await?;

    // Echo the checker's table so the run stays inspectable on the terminal
    if !cli.quiet {
        print!("{captured}");
    }

    report::write_raw(&cli.raw, &captured)?;

    let outcome = parser::parse_table(&captured)?;
    report::write_json(&cli.output, &outcome.mapping())?;
    report::render_summary(&outcome, &cli.output, cli.verbose, cli.quiet);

    Ok(())
}
