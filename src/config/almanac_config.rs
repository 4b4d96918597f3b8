use crate::config::config_manager::{config_keys, ConfigError, ConfigResult};
use crate::domain::types::RecommendationLevel;
use serde::{Deserialize, Serialize};

/// 择日服务配置
///
/// 加载顺序：内置默认值 → JSON 配置文件 → 环境变量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacConfig {
    /// 单次查询允许的最大天数（含首尾）
    pub max_range_days: i64,

    /// 并行分块天数
    pub parallel_chunk_days: i64,

    /// 最低保留等级（默认只保留"极佳"）
    pub min_level: RecommendationLevel,

    /// 未指定时是否按传统每七日做七
    pub traditional_mode_default: bool,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            max_range_days: 366,
            parallel_chunk_days: 31,
            min_level: RecommendationLevel::Excellent,
            traditional_mode_default: true,
        }
    }
}

impl AlmanacConfig {
    /// 校验取值范围
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_range_days < 1 {
            return Err(ConfigError::invalid(
                config_keys::MAX_RANGE_DAYS,
                self.max_range_days,
                "必须 >= 1",
            ));
        }
        if self.parallel_chunk_days < 1 {
            return Err(ConfigError::invalid(
                config_keys::PARALLEL_CHUNK_DAYS,
                self.parallel_chunk_days,
                "必须 >= 1",
            ));
        }
        if self.parallel_chunk_days > self.max_range_days {
            return Err(ConfigError::invalid(
                config_keys::PARALLEL_CHUNK_DAYS,
                self.parallel_chunk_days,
                format!("不得大于 {} ({})", config_keys::MAX_RANGE_DAYS, self.max_range_days),
            ));
        }
        Ok(())
    }
}
