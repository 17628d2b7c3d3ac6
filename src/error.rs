//! 统一错误类型定义
//!
//! 使用 `thiserror` 简化错误类型定义，
//! 提供 `AppError` 枚举和 `AppResult` 类型别名。
//! 文本引擎本身不会出错，这里只覆盖剪贴板、配置和 IPC 边界。

use serde::Serialize;
use thiserror::Error;

/// 应用级统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 剪贴板写入失败（平台拒绝或不可用）
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// 文本为空时按钮处于禁用状态
    #[error("action disabled: {0}")]
    ActionDisabled(&'static str),

    /// 配置错误
    #[error("config error: {0}")]
    Config(String),

    /// 文件操作错误
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IPC 请求无法解析
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// ========== Serialize 实现：前端需要序列化错误 ==========

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AppError", 2)?;

        let error_type = match self {
            AppError::Clipboard(_) => "clipboard",
            AppError::ActionDisabled(_) => "action_disabled",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Json(_) => "json",
            AppError::InvalidRequest(_) => "invalid_request",
        };
        state.serialize_field("type", error_type)?;
        state.serialize_field("message", &self.to_string())?;

        state.end()
    }
}

/// 应用级 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

/// 为 Result 类型添加错误上下文转换方法
pub trait ResultExt<T> {
    /// 将错误转换为剪贴板错误
    fn clipboard_err(self, msg: &str) -> AppResult<T>;

    /// 将错误转换为配置错误
    fn config_err(self, msg: &str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn clipboard_err(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Clipboard(format!("{}: {}", msg, e)))
    }

    fn config_err(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Config(format!("{}: {}", msg, e)))
    }
}
