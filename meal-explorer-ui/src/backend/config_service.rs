//! 配置服务

use std::path::{Path, PathBuf};
use std::time::Duration;

use meal_explorer_provider::{ClientConfig, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置目录下的应用子目录名
const APP_DIR_NAME: &str = "meal-explorer";
/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
///
/// 所有字段都有默认值，配置文件里只需写出要覆盖的项。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 基础地址
    pub api_base_url: String,
    /// 查询结束后延迟多久隐藏加载遮罩（毫秒）
    pub loading_hide_delay_ms: u64,
    /// 食材面板最多显示的条目数
    pub ingredient_list_limit: usize,
    /// 分类 / 食材描述的预览字符数
    pub description_preview_chars: usize,
    /// 是否丢弃过期响应（同一区域已有更新的请求时）
    pub discard_stale_responses: bool,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            loading_hide_delay_ms: 500,
            ingredient_list_limit: 24,
            description_preview_chars: 100,
            discard_stale_responses: false,
            connect_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn loading_hide_delay(&self) -> Duration {
        Duration::from_millis(self.loading_hide_delay_ms)
    }

    /// 目录客户端参数
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法确定配置目录")]
    NoConfigDir,

    #[error("读取配置文件失败 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 配置文件
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录：`<config_dir>/meal-explorer/config.json`
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("配置文件不存在，使用默认配置: {}", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        log::info!("已加载配置: {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(io_err)
    }
}
