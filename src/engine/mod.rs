//! 文本转换引擎
//!
//! 全部是纯函数：输入 `&str`，返回新的 `String` 或统计值，没有副作用。
//! 对任意输入（包括空串）都有定义，不会出错。

mod case;
mod metrics;
mod spacing;

pub use case::{capitalize, clear, to_lower, to_upper};
pub use metrics::{
    char_count, is_blank, is_js_space, preview, reading_minutes, word_count, TextStats, MINUTES_PER_WORD,
    PREVIEW_PLACEHOLDER,
};
pub use spacing::collapse_spaces;

use serde::{Deserialize, Serialize};

use crate::services::NotificationKind;

/// 会改写文档的按钮操作
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAction {
    Upper,
    Lower,
    Clear,
    Capitalize,
    CollapseSpaces,
}

impl TextAction {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextAction::Upper => to_upper(text),
            TextAction::Lower => to_lower(text),
            TextAction::Clear => clear(text),
            TextAction::Capitalize => capitalize(text),
            TextAction::CollapseSpaces => collapse_spaces(text),
        }
    }

    /// 操作完成后的提示文字
    pub fn message(self) -> &'static str {
        match self {
            TextAction::Upper => "Text converted to uppercase!",
            TextAction::Lower => "Text converted to lowercase!",
            TextAction::Clear => "Text cleared!",
            TextAction::Capitalize => "Text capitalized!",
            TextAction::CollapseSpaces => "Extra spaces removed!",
        }
    }

    pub fn notification_kind(self) -> NotificationKind {
        match self {
            TextAction::Clear => NotificationKind::Info,
            _ => NotificationKind::Success,
        }
    }
}
