//! 顶层控制器：文档、主题、提示都在这里显式持有，
//! 前端只拿到只读快照，所有修改都走这里的方法。

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::engine::{self, TextAction, TextStats};
use crate::error::{AppError, AppResult};
use crate::services::{
    AppConfig, ClipboardWriter, Notification, NotificationKind, Notifier, Palette, ThemeMode,
};

const EMPTY_TEXT: &str = "text is empty";

/// 前端一次渲染需要的全部数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub text: String,
    pub preview: String,
    pub stats: TextStats,
    pub summary: String,
    pub reading: String,
    pub theme: ThemeMode,
    pub palette: Palette,
    pub actions_enabled: bool,
    pub notification: Option<Notification>,
}

#[derive(Clone)]
pub struct AppState {
    document: Arc<Mutex<String>>,
    theme: Arc<Mutex<ThemeMode>>,
    notifier: Arc<Notifier>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl AppState {
    pub fn new(config: &AppConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            document: Arc::new(Mutex::new(String::new())),
            theme: Arc::new(Mutex::new(config.default_theme)),
            notifier: Arc::new(Notifier::new(config.notification_timeout())),
            clipboard,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn text(&self) -> String {
        self.document.lock().await.clone()
    }

    /// 键盘输入：直接替换整个文档
    pub async fn set_text(&self, text: String) {
        *self.document.lock().await = text;
    }

    pub async fn stats(&self) -> TextStats {
        TextStats::of(&self.document.lock().await)
    }

    pub async fn theme(&self) -> ThemeMode {
        *self.theme.lock().await
    }

    /// 执行按钮操作；文本为空时按钮禁用，返回 `ActionDisabled`，文档不变
    pub async fn apply(&self, action: TextAction) -> AppResult<String> {
        let updated = {
            let mut document = self.document.lock().await;
            if engine::is_blank(&document) {
                return Err(AppError::ActionDisabled(EMPTY_TEXT));
            }
            let updated = action.apply(&document);
            *document = updated.clone();
            updated
        };

        tracing::debug!(
            action = ?action,
            chars = engine::char_count(&updated),
            "Text action applied"
        );
        self.notifier
            .post(action.notification_kind(), action.message())
            .await;
        Ok(updated)
    }

    /// 复制到系统剪贴板
    ///
    /// 写入在阻塞线程池执行；失败时记录日志、弹出错误提示并返回错误，文档保持不变。
    pub async fn copy(&self) -> AppResult<()> {
        let text = self.text().await;
        if engine::is_blank(&text) {
            return Err(AppError::ActionDisabled(EMPTY_TEXT));
        }

        let clipboard = Arc::clone(&self.clipboard);
        let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text))
            .await
            .map_err(|e| AppError::Clipboard(format!("clipboard task failed: {}", e)))
            .and_then(|res| res);

        match result {
            Ok(()) => {
                self.notifier
                    .post(NotificationKind::Success, "Text copied to clipboard!")
                    .await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to copy text");
                self.notifier
                    .post(
                        NotificationKind::Error,
                        "Failed to copy text. Please try again.",
                    )
                    .await;
                Err(err)
            }
        }
    }

    pub async fn toggle_theme(&self) -> ThemeMode {
        let mode = {
            let mut theme = self.theme.lock().await;
            *theme = theme.toggled();
            *theme
        };
        tracing::debug!(mode = ?mode, "Theme toggled");
        self.notifier
            .post(NotificationKind::Success, mode.enabled_message())
            .await;
        mode
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        let text = self.text().await;
        let theme = self.theme().await;
        let stats = TextStats::of(&text);

        AppSnapshot {
            preview: engine::preview(&text).to_string(),
            summary: stats.summary_line(),
            reading: stats.reading_line(),
            actions_enabled: !engine::is_blank(&text),
            stats,
            theme,
            palette: theme.palette(),
            notification: self.notifier.current().await,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FakeClipboard;
    use crate::utils::capture_logs;

    fn state_with(clipboard: Arc<FakeClipboard>) -> AppState {
        AppState::new(&AppConfig::default(), clipboard)
    }

    #[tokio::test]
    async fn apply_replaces_document_and_notifies() {
        let state = state_with(Arc::new(FakeClipboard::default()));
        state.set_text("hello world".to_string()).await;

        let updated = state.apply(TextAction::Capitalize).await.unwrap();
        assert_eq!(updated, "Hello World");
        assert_eq!(state.text().await, "Hello World");

        let notification = state.notifier().current().await.unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Text capitalized!");
    }

    #[tokio::test]
    async fn apply_on_blank_text_is_disabled() {
        let state = state_with(Arc::new(FakeClipboard::default()));
        state.set_text("   ".to_string()).await;

        let err = state.apply(TextAction::Upper).await.unwrap_err();
        assert!(matches!(err, AppError::ActionDisabled(_)));
        assert_eq!(state.text().await, "   ");
        assert!(state.notifier().current().await.is_none());
    }

    #[tokio::test]
    async fn clear_posts_info() {
        let state = state_with(Arc::new(FakeClipboard::default()));
        state.set_text("bye".to_string()).await;

        assert_eq!(state.apply(TextAction::Clear).await.unwrap(), "");
        let notification = state.notifier().current().await.unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(notification.message, "Text cleared!");
    }

    #[tokio::test]
    async fn copy_writes_clipboard() {
        let clipboard = Arc::new(FakeClipboard::default());
        let state = state_with(clipboard.clone());
        state.set_text("copy me".to_string()).await;

        state.copy().await.unwrap();
        assert_eq!(clipboard.contents(), vec!["copy me".to_string()]);
        assert_eq!(
            state.notifier().current().await.unwrap().message,
            "Text copied to clipboard!"
        );
    }

    #[tokio::test]
    async fn failed_copy_keeps_document_and_reports_error() {
        let state = state_with(Arc::new(FakeClipboard::denying()));
        state.set_text("secret".to_string()).await;

        let err = state.copy().await.unwrap_err();
        assert!(matches!(err, AppError::Clipboard(_)));
        assert_eq!(state.text().await, "secret");

        let notification = state.notifier().current().await.unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Failed to copy text. Please try again.");
    }

    #[tokio::test]
    async fn copy_on_empty_text_is_disabled() {
        let clipboard = Arc::new(FakeClipboard::default());
        let state = state_with(clipboard.clone());

        assert!(matches!(
            state.copy().await,
            Err(AppError::ActionDisabled(_))
        ));
        assert!(clipboard.contents().is_empty());
    }

    #[tokio::test]
    async fn toggle_theme_round_trip() {
        let state = state_with(Arc::new(FakeClipboard::default()));
        assert_eq!(state.theme().await, ThemeMode::Light);

        assert_eq!(state.toggle_theme().await, ThemeMode::Dark);
        assert_eq!(
            state.notifier().current().await.unwrap().message,
            "Dark mode has been enabled"
        );

        assert_eq!(state.toggle_theme().await, ThemeMode::Light);
        assert_eq!(
            state.notifier().current().await.unwrap().message,
            "Light mode has been enabled"
        );
    }

    #[tokio::test]
    async fn snapshot_reflects_document() {
        let state = state_with(Arc::new(FakeClipboard::default()));

        let empty = state.snapshot().await;
        assert!(!empty.actions_enabled);
        assert_eq!(empty.preview, engine::PREVIEW_PLACEHOLDER);
        assert_eq!(empty.summary, "0 words and 0 characters");

        state.set_text("  the Quick   brown FOX ".to_string()).await;
        let snap = state.snapshot().await;
        assert!(snap.actions_enabled);
        assert_eq!(snap.stats.word_count, 4);
        assert_eq!(snap.stats.char_count, 24);
        assert_eq!(snap.preview, "  the Quick   brown FOX ");
        assert_eq!(snap.palette, ThemeMode::Light.palette());
    }

    #[tokio::test]
    async fn default_theme_comes_from_config() {
        let config = AppConfig {
            default_theme: ThemeMode::Dark,
            ..AppConfig::default()
        };
        let state = AppState::new(&config, Arc::new(FakeClipboard::default()));
        assert_eq!(state.theme().await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn apply_logs_character_count() {
        let (_guard, logs) = capture_logs();
        let state = state_with(Arc::new(FakeClipboard::default()));
        // 9 + 1 + 4 bytes, 3 + 1 + 4 chars
        state.set_text("日本語 text".to_string()).await;

        state.apply(TextAction::Upper).await.unwrap();
        let output = logs.contents();
        assert!(output.contains("chars=8"), "{output}");
        assert!(!output.contains("chars=14"), "{output}");
    }
}
