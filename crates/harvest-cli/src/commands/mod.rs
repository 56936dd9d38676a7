//! CLI command implementations.

pub mod batch;
pub mod download;
pub mod surveys;

use std::path::PathBuf;

use harvest::{Harvest, HarvestConfig};

/// Build a client from the global CLI options.
///
/// A missing `--token` falls back to the `SM_OAUTH_TOKEN` environment
/// variable.
pub fn build_client(
    token: Option<String>,
    rscript: Option<PathBuf>,
    r_home: Option<PathBuf>,
    completed_only: bool,
    limit: Option<usize>,
) -> Harvest {
    let mut config = HarvestConfig {
        oauth_token: token.or_else(|| std::env::var("SM_OAUTH_TOKEN").ok()),
        completed_only,
        rscript,
        r_home,
        ..Default::default()
    };
    if let Some(limit) = limit {
        config.survey_limit = limit;
    }
    Harvest::with_config(config)
}
