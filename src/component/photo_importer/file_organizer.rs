use super::photo_mover::{MoveResult, PhotoMover};
use crate::config::ImportProfile;
use crate::tools::{ensure_directory_exists, validate_photo_folder};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::info;
use std::path::{Path, PathBuf};

/// 一次整理的結果
#[derive(Debug)]
pub struct OrganizeResult {
    /// `<備份硬碟>/<YYYY-MM-DD>/<記憶卡名稱>`
    pub destination_folder: PathBuf,
    pub move_result: MoveResult,
}

/// 計算目標資料夾 `<destination_root>/<date>/<source volume name>`
pub fn destination_folder(
    destination_root: &Path,
    source_volume: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let volume_name = source_volume
        .file_name()
        .with_context(|| format!("無法取得記憶卡名稱: {}", source_volume.display()))?;

    Ok(destination_root
        .join(date.format("%Y-%m-%d").to_string())
        .join(volume_name))
}

/// 依日期與記憶卡名稱整理照片
pub struct FileOrganizer {
    profile: ImportProfile,
    mover: PhotoMover,
}

impl FileOrganizer {
    pub const fn new(profile: ImportProfile, mover: PhotoMover) -> Self {
        Self { profile, mover }
    }

    /// 使用今天的 UTC 日期
    pub fn organize_photos(
        &self,
        source_volume: &Path,
        destination_root: &Path,
    ) -> Result<OrganizeResult> {
        self.organize_photos_on(source_volume, destination_root, Utc::now().date_naive())
    }

    /// 日期只在這裡取一次，整次執行的檔案都放進同一個日期資料夾
    pub fn organize_photos_on(
        &self,
        source_volume: &Path,
        destination_root: &Path,
        date: NaiveDate,
    ) -> Result<OrganizeResult> {
        let destination_folder = destination_folder(destination_root, source_volume, date)?;
        ensure_directory_exists(&destination_folder)?;

        let photo_folder = self.profile.photo_folder(source_volume);
        info!(
            "整理照片: {} -> {}",
            photo_folder.display(),
            destination_folder.display()
        );

        validate_photo_folder(&photo_folder)?;
        let move_result = self.mover.move_photos(&photo_folder, &destination_folder)?;

        Ok(OrganizeResult {
            destination_folder,
            move_result,
        })
    }
}
