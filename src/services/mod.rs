mod app_config;
mod clipboard;
mod notifier;
mod theme;

pub use app_config::*;
pub use clipboard::*;
pub use notifier::*;
pub use theme::*;

#[cfg(test)]
pub(crate) use clipboard::fake::FakeClipboard;
