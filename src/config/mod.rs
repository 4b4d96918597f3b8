// ==========================================
// 喪葬擇日引擎 - 配置层
// ==========================================
// 职责: 服务配置管理,支持文件与环境变量覆写
// 存储: JSON 文件（可选）
// ==========================================

pub mod almanac_config;
pub mod config_manager;
pub mod config_reader_trait;

// 重导出核心配置管理器
pub use almanac_config::AlmanacConfig;
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
pub use config_reader_trait::AlmanacConfigReader;
