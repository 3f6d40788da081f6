use auto_photo_import::component::{ImportOutcome, PhotoImporter};
use auto_photo_import::config::Config;
use auto_photo_import::init;
use auto_photo_import::signal::setup_shutdown_signal;
use console::style;
use log::{info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();
    let shutdown_signal = setup_shutdown_signal();

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", style("錯誤:").red().bold());
            return ExitCode::FAILURE;
        }
    };

    match PhotoImporter::new(config, shutdown_signal).run() {
        Ok(ImportOutcome::Completed(_)) => {
            info!("Program exited normally");
            ExitCode::SUCCESS
        }
        Ok(ImportOutcome::SourceNotFound | ImportOutcome::DestinationNotFound(_)) => {
            ExitCode::FAILURE
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {e:#}", style("錯誤:").red().bold());
            ExitCode::FAILURE
        }
    }
}
