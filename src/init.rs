use env_logger::Env;

/// 初始化日誌，預設只輸出警告，可用 `RUST_LOG` 調整
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
