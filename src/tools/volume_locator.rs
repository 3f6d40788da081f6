//! 在掛載點根目錄下尋找記憶卡與備份硬碟

use anyhow::Result;
use console::style;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出根目錄下第一層的資料夾名稱與路徑，順序依檔案系統而定
///
/// 只有根目錄本身無法讀取時才回傳錯誤；單一項目（例如失效的連結）讀取失敗時略過
fn list_volumes(mount_root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut volumes = Vec::new();

    for entry in WalkDir::new(mount_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("略過無法讀取的項目: {e}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        // 非 UTF-8 名稱無法與名稱比對，直接略過
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        volumes.push((name, entry.into_path()));
    }

    Ok(volumes)
}

/// 依名稱條件回傳第一個符合的磁碟區；根目錄無法讀取時回報錯誤並回傳 `None`
fn find_volume(mount_root: &Path, matches: impl Fn(&str) -> bool) -> Option<PathBuf> {
    match list_volumes(mount_root) {
        Ok(volumes) => volumes
            .into_iter()
            .find(|(name, _)| matches(name))
            .map(|(_, path)| path),
        Err(e) => {
            warn!("無法讀取掛載點 {}: {e}", mount_root.display());
            eprintln!(
                "{} 無法讀取資料夾 \"{}\": {}",
                style("錯誤:").red().bold(),
                mount_root.display(),
                e
            );
            None
        }
    }
}

/// 尋找名稱包含任一標記字串的記憶卡
pub fn find_source_volume(mount_root: &Path, markers: &[String]) -> Option<PathBuf> {
    let found = find_volume(mount_root, |name| {
        markers.iter().any(|marker| name.contains(marker.as_str()))
    });
    debug!("記憶卡搜尋結果: {found:?}");
    found
}

/// 尋找名稱完全相同的備份硬碟
pub fn find_destination_volume(mount_root: &Path, drive_name: &str) -> Option<PathBuf> {
    let found = find_volume(mount_root, |name| name == drive_name);
    debug!("備份硬碟搜尋結果: {found:?}");
    found
}
