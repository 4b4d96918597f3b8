// ==========================================
// 喪葬擇日引擎 - 配置读取 Trait
// ==========================================
// 职责: 定义 API 层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::config_manager::ConfigResult;
use crate::domain::types::RecommendationLevel;
use async_trait::async_trait;

// ==========================================
// AlmanacConfigReader Trait
// ==========================================
// 实现者: ConfigManager（文件 + 环境变量），测试中可替换为 Mock
#[async_trait]
pub trait AlmanacConfigReader: Send + Sync {
    /// 单次查询最大天数
    ///
    /// # 默认值
    /// - 366
    async fn get_max_range_days(&self) -> ConfigResult<i64>;

    /// 并行分块天数
    ///
    /// # 默认值
    /// - 31
    async fn get_parallel_chunk_days(&self) -> ConfigResult<i64>;

    /// 最低保留等级
    ///
    /// # 默认值
    /// - EXCELLENT
    async fn get_min_level(&self) -> ConfigResult<RecommendationLevel>;

    /// 默认做七模式（true = 每七日一祭）
    async fn get_traditional_mode_default(&self) -> ConfigResult<bool>;
}
