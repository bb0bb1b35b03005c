//! 配置服务
//!
//! 把界面语言、数据语言、主题与数据服务地址持久化为 JSON 文件，
//! 存储位置：~/.config/hsrdb/config.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hsrdb_core::{ApiConfig, Lang};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 界面语言代码（空串表示跟随环境变量）
    pub ui_language: String,
    /// 数据语言
    pub data_lang: Lang,
    /// 主题索引（0 = 深色，1 = 浅色）
    pub theme: u8,
    /// 数据服务地址
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_language: String::new(),
            data_lang: Lang::default(),
            theme: 0,
            api_base: ApiConfig::default().base_url,
        }
    }
}

/// 本地配置服务
pub struct LocalConfigService;

impl LocalConfigService {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hsrdb").join("config.json"))
    }

    /// 加载配置；文件缺失或损坏时回落到默认值
    pub fn load(&self) -> AppConfig {
        let Some(path) = Self::config_path() else {
            return AppConfig::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("配置文件损坏，使用默认配置: {e}");
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        }
    }

    /// 保存配置
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let path = Self::config_path().context("无法确定配置目录")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(config)?;
        fs::write(&path, text).with_context(|| format!("写入配置失败: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:8787");
        assert_eq!(config.data_lang, Lang::Chs);
        assert_eq!(config.theme, 0);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"ui_language": "en-US", "data_lang": "JP"}"#).unwrap();
        assert_eq!(config.ui_language, "en-US");
        assert_eq!(config.data_lang, Lang::Jp);
        assert_eq!(config.api_base, "http://127.0.0.1:8787");
    }
}
