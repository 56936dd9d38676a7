//! Example: list surveys, filter by keyword, download and save one.
//!
//! Requires an R installation with the `surveymonkey` and `jsonlite`
//! packages, plus an OAuth token:
//!
//!   SM_OAUTH_TOKEN=... cargo run --example download -- Satisfaction

use std::env;
use std::fs::File;

use harvest::{Harvest, HarvestConfig};

fn main() -> harvest::Result<()> {
    let keyword = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example download -- <title-keyword>");
        std::process::exit(1);
    });

    let config = HarvestConfig {
        oauth_token: env::var("SM_OAUTH_TOKEN").ok(),
        ..Default::default()
    };
    let client = Harvest::with_config(config);

    println!("Listing surveys matching '{}'...", keyword);
    let surveys = client.filter_surveys(&keyword)?;
    println!("Found {} matching surveys", surveys.len());

    let Some(survey) = surveys.first() else {
        println!("Nothing to download.");
        return Ok(());
    };

    println!("Downloading '{}' (id {})...", survey.title, survey.id);
    let table = client.download(survey.id as u64)?;
    println!("{} rows x {} columns", table.nrow(), table.ncol());

    for column in table.columns() {
        let missing = column.missing_count();
        if missing > 0 {
            println!("  {}: {} missing values", column.name, missing);
        }
    }

    let path = format!("survey_{}.csv", survey.id);
    let file = File::create(&path).map_err(|e| harvest::HarvestError::Io {
        path: path.clone().into(),
        source: e,
    })?;
    table.write_csv(file)?;
    println!("Saved to {}", path);

    Ok(())
}
