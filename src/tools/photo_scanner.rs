use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// 列出資料夾第一層中檔名符合條件的檔案（不遞迴，依檔名排序）
///
/// 讀取資料夾失敗時直接回傳錯誤
pub fn scan_photo_files(
    directory: &Path,
    is_photo: impl Fn(&str) -> bool,
) -> Result<Vec<PhotoFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("無法讀取資料夾: {}", directory.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if is_photo(&file_name) {
            files.push(PhotoFile {
                path: entry.into_path(),
                file_name,
            });
        }
    }

    Ok(files)
}
