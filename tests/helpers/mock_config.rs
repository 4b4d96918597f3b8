// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use mourning_almanac::config::{AlmanacConfigReader, ConfigResult};
use mourning_almanac::domain::types::RecommendationLevel;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub max_range_days: i64,
    pub parallel_chunk_days: i64,
    pub min_level: RecommendationLevel,
    pub traditional_mode_default: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            max_range_days: 366,
            parallel_chunk_days: 31,
            min_level: RecommendationLevel::Excellent,
            traditional_mode_default: true,
        }
    }
}

impl MockConfig {
    /// 小分块，便于覆盖多块合并
    pub fn with_chunk(days: i64) -> Self {
        Self {
            parallel_chunk_days: days,
            ..Self::default()
        }
    }

    pub fn with_max_range(days: i64) -> Self {
        Self {
            max_range_days: days,
            ..Self::default()
        }
    }

    pub fn with_min_level(level: RecommendationLevel) -> Self {
        Self {
            min_level: level,
            ..Self::default()
        }
    }

    pub fn compressed() -> Self {
        Self {
            traditional_mode_default: false,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AlmanacConfigReader for MockConfig {
    async fn get_max_range_days(&self) -> ConfigResult<i64> {
        Ok(self.max_range_days)
    }

    async fn get_parallel_chunk_days(&self) -> ConfigResult<i64> {
        Ok(self.parallel_chunk_days)
    }

    async fn get_min_level(&self) -> ConfigResult<RecommendationLevel> {
        Ok(self.min_level)
    }

    async fn get_traditional_mode_default(&self) -> ConfigResult<bool> {
        Ok(self.traditional_mode_default)
    }
}
