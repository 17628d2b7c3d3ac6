//! 文本统计：词数、字符数、阅读时间

use serde::Serialize;

/// 每个词的阅读分钟数（约 125 词/分钟）
pub const MINUTES_PER_WORD: f64 = 0.008;

/// 预览区在文本为空时显示的占位文字
pub const PREVIEW_PLACEHOLDER: &str = "Enter your text to preview here";

/// 空白字符集：ECMAScript 的 WhiteSpace + LineTerminator（即正则 `\s`）。
/// 和 `char::is_whitespace` 不同：包含 U+FEFF，不包含 U+0085。
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// 去掉首尾空白后按空白切分，统计非空词数
pub fn word_count(text: &str) -> usize {
    text.split(is_js_space).filter(|w| !w.is_empty()).count()
}

/// 字符数：原始字符串的 UTF-16 code unit 数，不做 trim
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn reading_minutes(word_count: usize) -> f64 {
    MINUTES_PER_WORD * word_count as f64
}

/// 只有空白字符（或为空）
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_js_space)
}

pub fn preview(text: &str) -> &str {
    if is_blank(text) {
        PREVIEW_PLACEHOLDER
    } else {
        text
    }
}

/// 一次性算出全部统计值，每次读取都重新计算
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
    pub reading_minutes: f64,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            word_count: words,
            char_count: char_count(text),
            reading_minutes: reading_minutes(words),
        }
    }

    /// "3 words and 17 characters"
    pub fn summary_line(&self) -> String {
        format!("{} words and {} characters", self.word_count, self.char_count)
    }

    /// "0.024 minutes read"
    pub fn reading_line(&self) -> String {
        format!("{} minutes read", self.reading_minutes)
    }
}
