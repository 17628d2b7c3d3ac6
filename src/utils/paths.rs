use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{AppError, AppResult};

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "TEXTTOOLBOX_CONFIG";

/// 配置文件路径：优先读环境变量，否则使用系统配置目录下的 config.json
pub fn resolve_config_path() -> AppResult<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "texttoolbox", "TextToolbox").ok_or_else(|| {
        AppError::Config("Could not determine application config directory".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
