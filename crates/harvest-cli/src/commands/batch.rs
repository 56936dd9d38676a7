//! Batch command - download several surveys into a directory.

use std::path::PathBuf;

use colored::Colorize;
use harvest::Harvest;

use crate::cli::OutputFormat;
use crate::commands::download::write_table;

pub fn run(
    client: Harvest,
    survey_ids: Vec<u64>,
    dir: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    if verbose {
        eprintln!(
            "Downloading {} surveys via {}",
            survey_ids.len(),
            client.bridge_name()
        );
    }

    let results = client.download_many(&survey_ids);

    let mut failed = 0;
    for (id, result) in &results {
        match result {
            Ok(table) => {
                let path = dir.join(format!("survey_{}.{}", id, format.extension()));
                write_table(table, &path, format)?;
                println!(
                    "  {} {} ({} rows) -> {}",
                    "ok".green(),
                    id,
                    table.nrow(),
                    path.display()
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {} {}: {}", "failed".red(), id, e);
            }
        }
    }

    let succeeded = results.len() - failed;
    println!(
        "{} {} downloaded, {} failed",
        "Done:".bold(),
        succeeded.to_string().green(),
        failed.to_string().red()
    );

    if failed > 0 {
        return Err(format!("{} of {} downloads failed", failed, results.len()).into());
    }
    Ok(())
}
