use crate::{app_state::AppSnapshot, app_state::AppState, AppResult};

use super::ThemeResponse;

pub async fn toggle_theme(state: &AppState) -> AppResult<ThemeResponse> {
    let theme = state.toggle_theme().await;
    Ok(ThemeResponse {
        theme,
        palette: theme.palette(),
    })
}

pub async fn get_snapshot(state: &AppState) -> AppResult<AppSnapshot> {
    Ok(state.snapshot().await)
}

pub async fn dismiss_notification(state: &AppState) -> AppResult<()> {
    state.notifier().dismiss().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::{AppConfig, FakeClipboard, ThemeMode};

    #[tokio::test]
    async fn toggle_then_dismiss() {
        let state = AppState::new(&AppConfig::default(), Arc::new(FakeClipboard::default()));

        let res = toggle_theme(&state).await.unwrap();
        assert_eq!(res.theme, ThemeMode::Dark);
        assert_eq!(res.palette.input_background, "lightgrey");
        assert!(get_snapshot(&state).await.unwrap().notification.is_some());

        dismiss_notification(&state).await.unwrap();
        assert!(get_snapshot(&state).await.unwrap().notification.is_none());
    }
}
