mod logging;

use std::process::ExitCode;

use daily_engine::{
    ConfigError, DailyConfig, DailyRunner, JsonFileStore, LeetCodeCatalog, RunError, RunReport,
    TeamsWebhook,
};
use daily_logging::{daily_error, daily_info};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Run(#[from] RunError),
}

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::from_env());

    match run() {
        Ok(report) => {
            println!(
                "Sent question #{} ({}) to Microsoft Teams.",
                report.selection.id, report.selection.title
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            daily_error!("{}", err);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunReport, AppError> {
    let config = DailyConfig::load(&DailyConfig::default_path())?;

    let catalog = LeetCodeCatalog::new(config.fetch_settings());
    let store = JsonFileStore::new(config.asked_file.clone());
    let webhook = TeamsWebhook::new(config.delivery_settings());
    let runner = DailyRunner::new(&catalog, &store, &webhook);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(runner.run_once(&mut rand::thread_rng()))?;

    daily_info!(
        "Run complete: problem #{} ({}), day {}{}",
        report.selection.id,
        report.selection.title,
        report.day,
        if report.reset { ", history was reset" } else { "" }
    );
    Ok(report)
}
