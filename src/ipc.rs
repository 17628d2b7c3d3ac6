//! JSON-lines IPC host.
//!
//! One request object per input line, tagged by `"cmd"`; one response
//! object per output line, tagged by `"status"`. A bad line produces an
//! `invalid_request` error response and the loop keeps going; EOF ends it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app_state::AppState;
use crate::commands::{self, SetTextRequest};
use crate::engine;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcRequest {
    SetText(SetTextRequest),
    ToUpper,
    ToLower,
    ClearText,
    Capitalize,
    CollapseSpaces,
    CopyText,
    ToggleTheme,
    GetStats,
    GetSnapshot,
    DismissNotification,
}

impl IpcRequest {
    pub fn name(&self) -> &'static str {
        match self {
            IpcRequest::SetText(_) => "set_text",
            IpcRequest::ToUpper => "to_upper",
            IpcRequest::ToLower => "to_lower",
            IpcRequest::ClearText => "clear_text",
            IpcRequest::Capitalize => "capitalize",
            IpcRequest::CollapseSpaces => "collapse_spaces",
            IpcRequest::CopyText => "copy_text",
            IpcRequest::ToggleTheme => "toggle_theme",
            IpcRequest::GetStats => "get_stats",
            IpcRequest::GetSnapshot => "get_snapshot",
            IpcRequest::DismissNotification => "dismiss_notification",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IpcResponse {
    Ok { data: Value },
    Error { error: AppError },
}

impl From<AppResult<Value>> for IpcResponse {
    fn from(result: AppResult<Value>) -> Self {
        match result {
            Ok(data) => IpcResponse::Ok { data },
            Err(error) => IpcResponse::Error { error },
        }
    }
}

pub async fn dispatch(state: &AppState, request: IpcRequest) -> AppResult<Value> {
    let value = match request {
        IpcRequest::SetText(payload) => serde_json::to_value(commands::set_text(state, payload).await?)?,
        IpcRequest::ToUpper => serde_json::to_value(commands::to_upper(state).await?)?,
        IpcRequest::ToLower => serde_json::to_value(commands::to_lower(state).await?)?,
        IpcRequest::ClearText => serde_json::to_value(commands::clear_text(state).await?)?,
        IpcRequest::Capitalize => serde_json::to_value(commands::capitalize(state).await?)?,
        IpcRequest::CollapseSpaces => {
            serde_json::to_value(commands::collapse_spaces(state).await?)?
        }
        IpcRequest::CopyText => serde_json::to_value(commands::copy_text(state).await?)?,
        IpcRequest::ToggleTheme => serde_json::to_value(commands::toggle_theme(state).await?)?,
        IpcRequest::GetStats => serde_json::to_value(commands::get_stats(state).await?)?,
        IpcRequest::GetSnapshot => serde_json::to_value(commands::get_snapshot(state).await?)?,
        IpcRequest::DismissNotification => {
            serde_json::to_value(commands::dismiss_notification(state).await?)?
        }
    };
    Ok(value)
}

pub async fn handle_line(state: &AppState, line: &str) -> IpcResponse {
    let request: IpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected malformed IPC request");
            return IpcResponse::Error {
                error: AppError::InvalidRequest(err.to_string()),
            };
        }
    };

    match &request {
        IpcRequest::SetText(payload) => tracing::debug!(
            cmd = request.name(),
            chars = engine::char_count(&payload.text),
            "IPC request"
        ),
        _ => tracing::debug!(cmd = request.name(), "IPC request"),
    }
    dispatch(state, request).await.into()
}

/// Serve requests until the reader hits EOF. Blank lines are skipped.
pub async fn serve<R, W>(state: &AppState, reader: R, mut writer: W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(state, &line).await;
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }

    tracing::info!("IPC input closed");
    Ok(())
}
