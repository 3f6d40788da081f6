use crate::config::{FailurePolicy, ImportProfile};
use crate::tools::{PhotoFile, ensure_directory_exists, scan_photo_files};
use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 成功搬移的檔案
#[derive(Debug, Clone)]
pub struct MovedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// 搬移失敗的檔案（僅在 `FailurePolicy::Continue` 下記錄）
#[derive(Debug, Clone)]
pub struct MoveFailure {
    pub source: PathBuf,
    pub error: String,
}

/// 搬移結果
#[derive(Debug, Default)]
pub struct MoveResult {
    pub moved: Vec<MovedFile>,
    pub failures: Vec<MoveFailure>,
    /// 收到中斷訊號而提前停止
    pub interrupted: bool,
}

impl MoveResult {
    #[must_use]
    pub fn files_moved(&self) -> usize {
        self.moved.len()
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.failures.len()
    }
}

/// 將照片資料夾中符合副檔名的檔案複製到目標後刪除原檔
pub struct PhotoMover {
    profile: ImportProfile,
    shutdown_signal: Arc<AtomicBool>,
    progress: ProgressBar,
}

impl PhotoMover {
    pub fn new(profile: &ImportProfile, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            profile: profile.clone(),
            shutdown_signal,
            progress: ProgressBar::hidden(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// 逐一搬移來源資料夾第一層的照片
    ///
    /// 每個檔案都是先複製、確認成功後才刪除原檔，所以複製失敗時原檔一定還在。
    /// 中斷訊號只在檔案之間檢查。
    pub fn move_photos(
        &self,
        source_folder: &Path,
        destination_folder: &Path,
    ) -> Result<MoveResult> {
        let files = scan_photo_files(source_folder, |name| self.profile.is_photo_file(name))?;
        info!(
            "在 {} 找到 {} 個待搬移檔案",
            source_folder.display(),
            files.len()
        );

        let mut result = MoveResult::default();
        self.progress.set_length(files.len() as u64);
        self.progress.set_position(0);

        for file in &files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                result.interrupted = true;
                break;
            }

            self.progress.set_message(file.file_name.clone());
            match self.move_one(file, destination_folder) {
                Ok(target) => {
                    self.progress.suspend(|| {
                        println!(
                            "{} 已整理 {} 到 {}",
                            style("✓").green(),
                            file.file_name,
                            target.display()
                        );
                    });
                    result.moved.push(MovedFile {
                        source: file.path.clone(),
                        destination: target,
                    });
                }
                Err(e) if self.profile.failure_policy == FailurePolicy::Continue => {
                    warn!("搬移檔案失敗 {}: {e:#}", file.path.display());
                    result.failures.push(MoveFailure {
                        source: file.path.clone(),
                        error: format!("{e:#}"),
                    });
                }
                Err(e) => {
                    self.progress.finish_and_clear();
                    return Err(e);
                }
            }
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(result)
    }

    /// pending → copied → moved
    fn move_one(&self, file: &PhotoFile, destination_folder: &Path) -> Result<PathBuf> {
        ensure_directory_exists(destination_folder)?;
        let target = destination_folder.join(&file.file_name);

        // 同名檔案直接覆蓋
        let bytes = fs::copy(&file.path, &target).with_context(|| {
            format!("複製檔案失敗: {} -> {}", file.path.display(), target.display())
        })?;
        debug!("已複製 {bytes} bytes: {}", target.display());

        fs::remove_file(&file.path)
            .with_context(|| format!("刪除原檔案失敗: {}", file.path.display()))?;

        Ok(target)
    }
}
