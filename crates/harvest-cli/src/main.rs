//! Harvest CLI - SurveyMonkey survey retrieval through R.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Surveys {
            filter,
            limit,
            json,
        } => {
            let client =
                commands::build_client(cli.token, cli.rscript, cli.r_home, true, Some(limit));
            commands::surveys::run(client, filter, json, cli.verbose)
        }

        Commands::Download {
            survey_id,
            output,
            format,
            all_statuses,
        } => {
            let client =
                commands::build_client(cli.token, cli.rscript, cli.r_home, !all_statuses, None);
            commands::download::run(client, survey_id, output, format, cli.verbose)
        }

        Commands::Batch {
            survey_ids,
            dir,
            format,
            all_statuses,
        } => {
            let client =
                commands::build_client(cli.token, cli.rscript, cli.r_home, !all_statuses, None);
            commands::batch::run(client, survey_ids, dir, format, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
