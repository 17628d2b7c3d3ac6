//! 系统剪贴板写入
//!
//! 通过 `ClipboardWriter` 抽象平台剪贴板，方便测试时替换。

use clipboard_rs::{Clipboard, ClipboardContext};

use crate::error::{AppResult, ResultExt};

/// 写入纯文本到剪贴板；平台拒绝时返回 `AppError::Clipboard`
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// 基于 clipboard-rs 的系统剪贴板，每次写入时重新打开上下文
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        let ctx = ClipboardContext::new().clipboard_err("cannot access clipboard")?;
        ctx.set_text(text.to_string())
            .clipboard_err("failed to write clipboard")
    }
}
