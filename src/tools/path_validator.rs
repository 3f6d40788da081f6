use anyhow::{Context, Result, bail};
use std::path::Path;

/// 確認記憶卡上的照片資料夾（例如 `DCIM/102_FUJI`）存在
pub fn validate_photo_folder(photo_folder: &Path) -> Result<()> {
    if !photo_folder.exists() {
        bail!("記憶卡上找不到照片資料夾: {}", photo_folder.display());
    }
    if !photo_folder.is_dir() {
        bail!("照片路徑不是資料夾: {}", photo_folder.display());
    }
    Ok(())
}

/// 建立資料夾（含所有上層），已存在時不做任何事
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}
