use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::models::ParseOutcome;

/// Persist the checker's raw output verbatim, overwriting any previous run.
pub fn write_raw(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// Write the mapping as pretty-printed JSON with 4-space indentation,
/// overwriting any previous run. An empty mapping serializes to `{}`.
pub fn write_json(path: &Path, mapping: &Map<String, Value>) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    mapping
        .serialize(&mut serializer)
        .context("failed to serialize license mapping")?;

    std::fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))
}

/// Print the run summary and completion message.
pub fn render_summary(outcome: &ParseOutcome, json_path: &Path, verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    println!(
        "  {} {} packages ({} without a license file)",
        "→".cyan(),
        outcome.entries.len(),
        outcome.missing_count()
    );

    if !outcome.skipped.is_empty() {
        println!(
            "  {} {} table line(s) could not be parsed",
            "⚠".yellow(),
            outcome.skipped.len()
        );
        if verbose {
            for line in &outcome.skipped {
                println!("    {}", line.dimmed());
            }
        }
    }

    println!(
        "Package-license pairs have been extracted to {}",
        json_path.display()
    );
}
