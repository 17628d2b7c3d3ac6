//! 命令请求 / 响应类型

use serde::{Deserialize, Serialize};

use crate::engine::TextStats;
use crate::services::{Palette, ThemeMode};

/// 文本输入请求
#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    pub text: String,
}

/// 改写文本后的响应：新文本和重新计算的统计
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
    pub stats: TextStats,
}

impl TextResponse {
    pub fn from_text(text: String) -> Self {
        let stats = TextStats::of(&text);
        Self { text, stats }
    }
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: ThemeMode,
    pub palette: Palette,
}
