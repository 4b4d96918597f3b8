// ==========================================
// 喪葬擇日引擎 - API 层
// ==========================================
// 职责: 提供择日 API 接口,供命令行与上层路由调用
// ==========================================

pub mod almanac_api;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use almanac_api::{overall_advice, AlmanacApi};
pub use error::{ApiError, ApiResult};
pub use validator::{parse_date, parse_request_json, parse_zodiac, RequestValidator};
