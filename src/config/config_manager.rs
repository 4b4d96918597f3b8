// ==========================================
// 喪葬擇日引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 来源: 内置默认值 → JSON 文件 → 环境变量（后者覆盖前者）
// ==========================================

use crate::config::almanac_config::AlmanacConfig;
use crate::config::config_reader_trait::AlmanacConfigReader;
use crate::domain::types::RecommendationLevel;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值无效: {key} = {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(key: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: AlmanacConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 仅使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有配置创建（会校验）
    pub fn from_config(config: AlmanacConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 完整加载流程
    ///
    /// # 参数
    /// - path: 显式配置文件路径；为 None 时尝试默认路径（不存在则跳过）
    ///
    /// # 错误
    /// - 显式路径不存在/不可读: ConfigError::Io
    /// - JSON 格式错误: ConfigError::Parse
    /// - 环境变量或文件取值非法: ConfigError::InvalidValue
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// 同 load，环境变量来源可注入
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path().filter(|p| p.is_file()),
        };

        let mut config = match &source {
            Some(p) => Self::load_file(p)?,
            None => AlmanacConfig::default(),
        };

        apply_env_overrides(&mut config, env)?;
        config.validate()?;

        info!(
            source = ?source,
            max_range_days = config.max_range_days,
            parallel_chunk_days = config.parallel_chunk_days,
            min_level = %config.min_level,
            "配置加载完成"
        );

        Ok(Self { config, source })
    }

    /// 读取 JSON 配置文件（缺省字段取默认值）
    pub fn load_file(path: &Path) -> ConfigResult<AlmanacConfig> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AlmanacConfig = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "已读取配置文件");
        Ok(config)
    }

    /// 默认配置文件路径: {config_dir}/mourning-almanac/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(config_keys::APP_DIR).join(config_keys::FILE_NAME))
    }

    pub fn config(&self) -> &AlmanacConfig {
        &self.config
    }

    /// 实际读取的配置文件（未读取文件时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取配置快照（JSON）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

fn apply_env_overrides<F>(config: &mut AlmanacConfig, env: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env(config_keys::ENV_MAX_RANGE_DAYS) {
        config.max_range_days = parse_env_int(config_keys::ENV_MAX_RANGE_DAYS, &raw)?;
    }
    if let Some(raw) = env(config_keys::ENV_PARALLEL_CHUNK_DAYS) {
        config.parallel_chunk_days = parse_env_int(config_keys::ENV_PARALLEL_CHUNK_DAYS, &raw)?;
    }
    if let Some(raw) = env(config_keys::ENV_MIN_LEVEL) {
        config.min_level = raw
            .trim()
            .parse::<RecommendationLevel>()
            .map_err(|e| ConfigError::invalid(config_keys::ENV_MIN_LEVEL, &raw, e))?;
    }
    Ok(())
}

fn parse_env_int(key: &str, raw: &str) -> ConfigResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::invalid(key, raw, e.to_string()))
}

#[async_trait]
impl AlmanacConfigReader for ConfigManager {
    async fn get_max_range_days(&self) -> ConfigResult<i64> {
        Ok(self.config.max_range_days)
    }

    async fn get_parallel_chunk_days(&self) -> ConfigResult<i64> {
        Ok(self.config.parallel_chunk_days)
    }

    async fn get_min_level(&self) -> ConfigResult<RecommendationLevel> {
        Ok(self.config.min_level)
    }

    async fn get_traditional_mode_default(&self) -> ConfigResult<bool> {
        Ok(self.config.traditional_mode_default)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 文件键
    pub const MAX_RANGE_DAYS: &str = "max_range_days";
    pub const PARALLEL_CHUNK_DAYS: &str = "parallel_chunk_days";

    // 环境变量
    pub const ENV_MAX_RANGE_DAYS: &str = "MOURNING_ALMANAC_MAX_RANGE_DAYS";
    pub const ENV_PARALLEL_CHUNK_DAYS: &str = "MOURNING_ALMANAC_PARALLEL_CHUNK_DAYS";
    pub const ENV_MIN_LEVEL: &str = "MOURNING_ALMANAC_MIN_LEVEL";

    // 默认路径
    pub const APP_DIR: &str = "mourning-almanac";
    pub const FILE_NAME: &str = "config.json";
}
