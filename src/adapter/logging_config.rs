use crate::domain::port::LogLevel;
use std::env;

const LEVEL_VAR: &str = "INVENTORY_LOG_LEVEL";
const COMPONENT_VAR: &str = "INVENTORY_LOG_COMPONENT";

/// ログ出力設定を管理する構造体
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub component: String,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            component: "InventoryService".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 環境変数から設定を読み取る
    /// 環境変数が設定されていない場合はデフォルト値を使用
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let level = match env::var(LEVEL_VAR) {
            Ok(value) => parse_level(&value)?,
            Err(_) => defaults.level,
        };

        let component = env::var(COMPONENT_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.component);

        Ok(Self { level, component })
    }

    /// .envファイルがあれば読み込んでから環境変数を読み取る
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

fn parse_level(value: &str) -> Result<LogLevel, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warning),
        "error" => Ok(LogLevel::Error),
        other => Err(ConfigError::InvalidValue(format!(
            "Invalid {}: {}",
            LEVEL_VAR, other
        ))),
    }
}
