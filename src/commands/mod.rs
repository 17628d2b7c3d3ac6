//! 前端可调用的命令
//!
//! 每个按钮对应一个命令，参数和返回值都可序列化，错误统一为 `AppError`。

mod clipboard;
mod text;
mod theme;
mod types;

pub use clipboard::*;
pub use text::*;
pub use theme::*;
pub use types::*;
