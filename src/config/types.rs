use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 傳輸失敗時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// 第一個錯誤就中止整個匯入
    #[default]
    Halt,
    /// 記錄失敗的檔案後繼續處理下一個
    Continue,
}

/// 匯入設定：所有固定路徑與名稱
#[derive(Debug, Clone, Deserialize)]
pub struct ImportProfile {
    /// 掛載點根目錄，底下每個子資料夾都是一個磁碟區
    #[serde(rename = "MOUNT_ROOT")]
    pub mount_root: PathBuf,
    /// 記憶卡名稱需包含其中之一（區分大小寫）
    #[serde(rename = "SOURCE_VOLUME_MARKERS")]
    pub source_markers: Vec<String>,
    /// 備份硬碟的完整名稱
    #[serde(rename = "DESTINATION_VOLUME")]
    pub destination_volume: String,
    /// 記憶卡上存放照片的相對路徑
    #[serde(rename = "PHOTO_SUBFOLDER")]
    pub photo_subfolder: Vec<String>,
    /// 要搬移的副檔名，含前導的點
    #[serde(rename = "PHOTO_EXTENSIONS")]
    pub photo_extensions: Vec<String>,
    #[serde(rename = "ON_ERROR", default)]
    pub failure_policy: FailurePolicy,
}

impl ImportProfile {
    /// 記憶卡上的照片資料夾，例如 `<card>/DCIM/102_FUJI`
    #[must_use]
    pub fn photo_folder(&self, source_volume: &Path) -> PathBuf {
        self.photo_subfolder
            .iter()
            .fold(source_volume.to_path_buf(), |path, part| path.join(part))
    }

    /// 檔名（不分大小寫）是否以任一設定的副檔名結尾
    #[must_use]
    pub fn is_photo_file(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.photo_extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_lowercase()))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub import_profile: ImportProfile,
}
