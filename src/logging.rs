//! 日志初始化
//!
//! TUI 占用了 stdout，日志写入数据目录下的文件

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// 获取日志文件路径 (~/.local/share/ikit-news/ikit-news.log)
pub fn log_path(config: &LogConfig) -> AppResult<PathBuf> {
    if let Some(file) = &config.file {
        return Ok(file.clone());
    }

    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join("ikit-news");
    Ok(data_dir.join("ikit-news.log"))
}

/// RUST_LOG 优先，否则使用配置中的级别
fn build_filter(level: &str) -> AppResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| AppError::Logging(e.to_string())),
    }
}

pub fn init(config: &LogConfig) -> AppResult<PathBuf> {
    let path = log_path(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_file_wins() {
        let config = LogConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        assert_eq!(log_path(&config).unwrap(), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(
            build_filter("ikit_news=loud"),
            Err(AppError::Logging(_))
        ));
        assert!(build_filter("debug").is_ok());
    }
}
