use crate::{app_state::AppState, AppResult};

use super::CopyResponse;

/// 把当前文档写入系统剪贴板
///
/// 失败时控制器已经弹出错误提示，这里把错误原样交给前端。
pub async fn copy_text(state: &AppState) -> AppResult<CopyResponse> {
    state.copy().await?;
    Ok(CopyResponse { success: true })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::{AppConfig, FakeClipboard};

    #[tokio::test]
    async fn copy_text_reports_success() {
        let clipboard = Arc::new(FakeClipboard::default());
        let state = AppState::new(&AppConfig::default(), clipboard.clone());
        state.set_text("abc".to_string()).await;

        assert!(copy_text(&state).await.unwrap().success);
        assert_eq!(clipboard.contents(), vec!["abc".to_string()]);
    }

    #[tokio::test]
    async fn copy_text_propagates_platform_error() {
        let state = AppState::new(
            &AppConfig::default(),
            Arc::new(FakeClipboard::denying()),
        );
        state.set_text("abc".to_string()).await;

        let err = copy_text(&state).await.unwrap_err();
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "clipboard");
    }
}
