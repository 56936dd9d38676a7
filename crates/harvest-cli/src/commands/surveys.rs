//! Surveys command - list the account's surveys.

use colored::Colorize;
use harvest::Harvest;

pub fn run(
    client: Harvest,
    filter: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        eprintln!("Listing surveys via {}", client.bridge_name());
    }

    let surveys = match &filter {
        Some(pattern) => client.filter_surveys(pattern)?,
        None => client.surveys()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&surveys)?);
        return Ok(());
    }

    if surveys.is_empty() {
        println!("{}", "No surveys found".yellow());
        return Ok(());
    }

    println!(
        "{} {}",
        surveys.len().to_string().white().bold(),
        if surveys.len() == 1 {
            "survey"
        } else {
            "surveys"
        }
    );
    for survey in &surveys {
        println!("  {:>12}  {}", survey.id.to_string().cyan(), survey.title);
    }

    Ok(())
}
