// ==========================================
// 喪葬擇日引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/配置错误转换为调用方可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误（不重试）
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 换算错误
    // ==========================================
    #[error("农历换算失败: {0}")]
    ConversionError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 是否为调用方输入问题
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::InvalidInput(_) | ApiError::ValidationError(_))
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(msg) => ApiError::ValidationError(msg),
            EngineError::Conversion { message, .. } => ApiError::ConversionError(message),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_mapping() {
        let err: ApiError = EngineError::Validation("起始日晚於結束日".to_string()).into();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert!(err.is_client_error());

        let err: ApiError = EngineError::Conversion {
            date: None,
            message: "超出支持范围".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::ConversionError(_)));
        assert!(!err.is_client_error());
    }
}
