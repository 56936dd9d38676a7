//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Harvest: SurveyMonkey survey retrieval through R
#[derive(Parser)]
#[command(name = "harvest")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SurveyMonkey OAuth token (default: SM_OAUTH_TOKEN env var)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to the Rscript executable
    #[arg(long, global = true)]
    pub rscript: Option<PathBuf>,

    /// R_HOME for spawned R processes
    #[arg(long, global = true)]
    pub r_home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available surveys, optionally filtered by title
    Surveys {
        /// Regex to match against survey titles
        #[arg(short, long)]
        filter: Option<String>,

        /// Maximum surveys to list
        #[arg(short, long, default_value = "200")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download one survey's responses
    Download {
        /// Survey id
        #[arg(value_name = "SURVEY_ID")]
        survey_id: u64,

        /// Output path (default: survey_<id>.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'F', long, default_value = "csv")]
        format: OutputFormat,

        /// Include responses of every status, not just completed
        #[arg(long)]
        all_statuses: bool,
    },

    /// Download several surveys into a directory
    Batch {
        /// Survey ids
        #[arg(value_name = "SURVEY_ID", required = true)]
        survey_ids: Vec<u64>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Output format
        #[arg(short = 'F', long, default_value = "csv")]
        format: OutputFormat,

        /// Include responses of every status, not just completed
        #[arg(long)]
        all_statuses: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
