pub mod app_state;
pub mod commands;
pub mod engine;
mod error;
pub mod ipc;
pub mod services;
pub mod utils;

use std::sync::Arc;

pub use app_state::{AppSnapshot, AppState};
pub use error::{AppError, AppResult, ResultExt};

use services::{AppConfigService, SystemClipboard};

/// 启动 IPC 主机：读取配置、初始化日志、构建状态，然后在 stdin/stdout 上处理请求直到 EOF
pub async fn run() -> AppResult<()> {
    let config_path = utils::resolve_config_path()?;
    let config = match AppConfigService::new(&config_path).load() {
        Ok(config) => config,
        Err(err) => {
            utils::init_tracing("info");
            return Err(err);
        }
    };

    utils::init_tracing(&config.log_filter);
    tracing::info!(
        config = %config_path.display(),
        theme = ?config.default_theme,
        "Starting texttoolbox"
    );

    let state = AppState::new(&config, Arc::new(SystemClipboard));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    ipc::serve(&state, stdin, stdout).await
}
