//! 大小写转换

/// 全部转大写（Unicode 完整映射，与区域设置无关，如 `ß` → `SS`）
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// 全部转小写
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// 清空文本，忽略输入
pub fn clear(_text: &str) -> String {
    String::new()
}

/// Word characters in the regex `\w` sense: ASCII letters, digits, `_`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// 每个单词首字母大写
///
/// 单词 = 连续的 `[A-Za-z0-9_]`。只改动每段的第一个字符，其余原样保留，
/// 所以 `"hELLO"` → `"HELLO"`，`"hello-world"` → `"Hello-World"`。
/// 非 ASCII 字母不算单词字符：`"école"` → `"éCole"`。
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;

    for c in text.chars() {
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }

    out
}
