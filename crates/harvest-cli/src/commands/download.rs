//! Download command - fetch one survey's responses and save them.

use std::fs::File;
use std::path::{Path, PathBuf};

use colored::Colorize;
use harvest::{Harvest, Table};

use crate::cli::OutputFormat;

pub fn run(
    client: Harvest,
    survey_id: u64,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} survey {}",
        "Downloading".cyan().bold(),
        survey_id.to_string().white()
    );

    let table = client.download(survey_id)?;

    if verbose {
        for column in table.columns() {
            let missing = column.missing_count();
            if missing > 0 {
                println!(
                    "  {}: {} missing",
                    column.name,
                    missing.to_string().yellow()
                );
            }
        }
    }

    let path = output
        .unwrap_or_else(|| PathBuf::from(format!("survey_{}.{}", survey_id, format.extension())));
    write_table(&table, &path, format)?;

    println!(
        "{} {} rows x {} columns to {}",
        "Saved".green().bold(),
        table.nrow(),
        table.ncol(),
        path.display()
    );

    Ok(())
}

/// Write a table to `path` in the requested format.
pub fn write_table(
    table: &Table,
    path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    match format {
        OutputFormat::Csv => table.write_csv(file)?,
        OutputFormat::Tsv => table.write_delimited(file, b'\t')?,
        OutputFormat::Json => serde_json::to_writer_pretty(file, table)?,
    }
    Ok(())
}
