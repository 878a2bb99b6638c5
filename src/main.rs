use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ynab_pivot::api::YnabClient;
use ynab_pivot::cli::{handle_report_command, ReportArgs, ReportCommands, ReportKind};

#[derive(Parser)]
#[command(
    name = "ynab-pivot",
    version,
    about = "Tab-separated yearly reports from a YNAB budget",
    long_about = "Fetches a YNAB budget and prints one row per category per month \
                  for the chosen year (month, group, category, activity), ready for \
                  a spreadsheet pivot table. The `accounts` subcommand prints a \
                  month-by-month income, allocation and spend summary instead."
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    #[command(subcommand)]
    command: Option<ReportCommands>,
}

fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.report.resolve()?;
    let client = YnabClient::from_settings(&settings)?;

    handle_report_command(&client, &settings, ReportKind::from(cli.command))?;

    Ok(())
}
