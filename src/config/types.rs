//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::search::SortOrder;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 检索 API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 检索行为配置
    #[serde(default)]
    pub search: SearchConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 检索 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API 端点
    #[serde(default = "default_api_url")]
    pub url: String,

    /// 请求时使用的 User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.syosetu.com/novelapi/api/".to_string()
}

fn default_user_agent() -> String {
    concat!("narou-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// 检索行为配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// 启动时选中的排序（代码，如 `new`）
    #[serde(default)]
    pub default_order: SortOrder,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志文件；TUI 模式下未设置则丢弃日志
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.url, "https://api.syosetu.com/novelapi/api/");
        assert_eq!(config.search.default_order, SortOrder::New);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_user_agent_carries_version() {
        let config = ApiConfig::default();
        assert_eq!(
            config.user_agent,
            format!("narou-search/{}", env!("CARGO_PKG_VERSION"))
        );
    }
}
