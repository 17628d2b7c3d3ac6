//! 应用配置服务
//! 从配置目录读取 JSON 配置；文件不存在时使用默认值

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult, ResultExt};
use crate::services::ThemeMode;

/// 配置数据结构，所有字段都可省略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_theme: ThemeMode,
    pub notification_timeout_ms: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::Light,
            notification_timeout_ms: 3000,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    fn validate(&self) -> AppResult<()> {
        if self.notification_timeout_ms == 0 {
            return Err(AppError::Config(
                "notification_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(AppError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}

/// 配置服务
pub struct AppConfigService {
    config_path: PathBuf,
}

impl AppConfigService {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// 加载配置（如果文件不存在则返回默认配置）
    pub fn load(&self) -> AppResult<AppConfig> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "Config file missing, using defaults");
            return Ok(AppConfig::default());
        }

        let raw = fs::read(&self.config_path)?;
        let config: AppConfig = serde_json::from_slice(&raw)
            .config_err(&format!("invalid config {}", self.config_path.display()))?;
        config.validate()?;
        Ok(config)
    }
}
