use crate::{app_state::AppState, engine::TextAction, engine::TextStats, AppResult};

use super::{SetTextRequest, TextResponse};

macro_rules! text_action_command {
    ($name:ident, $action:expr) => {
        pub async fn $name(state: &AppState) -> AppResult<TextResponse> {
            let text = state.apply($action).await?;
            Ok(TextResponse::from_text(text))
        }
    };
}

text_action_command!(to_upper, TextAction::Upper);
text_action_command!(to_lower, TextAction::Lower);
text_action_command!(clear_text, TextAction::Clear);
text_action_command!(capitalize, TextAction::Capitalize);
text_action_command!(collapse_spaces, TextAction::CollapseSpaces);

pub async fn set_text(state: &AppState, payload: SetTextRequest) -> AppResult<TextResponse> {
    state.set_text(payload.text.clone()).await;
    Ok(TextResponse::from_text(payload.text))
}

pub async fn get_stats(state: &AppState) -> AppResult<TextStats> {
    Ok(state.stats().await)
}
