use crate::config::types::{Config, ImportProfile};
use anyhow::{Context, Result};

/// 編譯時嵌入的匯入設定（不需要外部檔案）
const IMPORT_PROFILE_JSON: &str = include_str!("../../data/import_profile.json");

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            import_profile: ImportProfile::embedded()?,
        })
    }
}

impl ImportProfile {
    /// 從編譯時嵌入的 JSON 載入匯入設定
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(IMPORT_PROFILE_JSON).context("無法解析嵌入的匯入設定")
    }
}
