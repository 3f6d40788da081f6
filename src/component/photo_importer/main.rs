use super::file_organizer::{FileOrganizer, OrganizeResult};
use super::photo_mover::PhotoMover;
use crate::config::Config;
use crate::tools::{find_destination_volume, find_source_volume};
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 匯入結束的狀態
#[derive(Debug)]
pub enum ImportOutcome {
    SourceNotFound,
    DestinationNotFound(String),
    Completed(OrganizeResult),
}

/// 記憶卡照片匯入元件
pub struct PhotoImporter {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl PhotoImporter {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<ImportOutcome> {
        let profile = &self.config.import_profile;

        let source_volume = find_source_volume(&profile.mount_root, &profile.source_markers);
        let destination_volume =
            find_destination_volume(&profile.mount_root, &profile.destination_volume);

        let Some(source_volume) = source_volume else {
            warn!("找不到記憶卡");
            eprintln!("{}", style("找不到記憶卡。").red().bold());
            return Ok(ImportOutcome::SourceNotFound);
        };
        let Some(destination_volume) = destination_volume else {
            warn!("找不到備份硬碟 {}", profile.destination_volume);
            eprintln!(
                "{}",
                style(format!("找不到備份硬碟 \"{}\"。", profile.destination_volume))
                    .red()
                    .bold()
            );
            return Ok(ImportOutcome::DestinationNotFound(
                profile.destination_volume.clone(),
            ));
        };

        println!("{}", style("=== 匯入記憶卡照片 ===").cyan().bold());
        println!("  記憶卡: {}", style(source_volume.display()).cyan());
        println!("  備份硬碟: {}", style(destination_volume.display()).cyan());

        let mover = PhotoMover::new(profile, Arc::clone(&self.shutdown_signal))
            .with_progress(Self::create_progress_bar());
        let organizer = FileOrganizer::new(profile.clone(), mover);
        let result = organizer.organize_photos(&source_volume, &destination_volume)?;

        self.print_result(&result);

        Ok(ImportOutcome::Completed(result))
    }

    fn create_progress_bar() -> ProgressBar {
        let progress_bar = ProgressBar::new(0);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar
    }

    fn print_result(&self, result: &OrganizeResult) {
        let moves = &result.move_result;

        println!();
        println!("{}", style("=== 匯入結果 ===").cyan().bold());
        println!(
            "  目標資料夾: {}",
            style(result.destination_folder.display()).cyan()
        );
        println!("  成功搬移: {} 個檔案", style(moves.files_moved()).green());

        if moves.errors() > 0 {
            println!("  失敗: {} 個檔案", style(moves.errors()).red());
            for failure in &moves.failures {
                println!(
                    "  {} {}: {}",
                    style("✗").red(),
                    failure.source.display(),
                    failure.error
                );
            }
        }

        if moves.interrupted {
            println!("{}", style("已中斷，剩餘檔案保留在記憶卡上").yellow());
        }

        info!(
            "照片匯入完成 - 移動: {}, 失敗: {}, 中斷: {}",
            moves.files_moved(),
            moves.errors(),
            moves.interrupted
        );
    }
}
