//! 主题：浅色 / 深色

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// 各区域的颜色，直接交给前端渲染
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub page_background: &'static str,
    pub text: &'static str,
    pub panel_background: &'static str,
    pub card_background: &'static str,
    pub input_background: &'static str,
    pub input_text: &'static str,
}

const NAVY: &str = "#042743";

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// 切换到当前模式后显示的提示
    pub fn enabled_message(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light mode has been enabled",
            ThemeMode::Dark => "Dark mode has been enabled",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                page_background: "white",
                text: NAVY,
                panel_background: "#f8f9fa",
                card_background: "#ffffff",
                input_background: "white",
                input_text: "black",
            },
            ThemeMode::Dark => Palette {
                page_background: NAVY,
                text: "white",
                panel_background: NAVY,
                card_background: "#1c1c1c",
                input_background: "lightgrey",
                input_text: "black",
            },
        }
    }
}
