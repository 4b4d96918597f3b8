// ==========================================
// 喪葬擇日引擎 - 引擎层错误类型
// ==========================================
// ValidationError: 请求形状错误，立即返回，不重试
// ConversionError: 农历换算原语失败；区间查询中跳过该日，单日计算直接返回
// 数据质量问题不是错误: 记 warn 日志后按"无冲突"处理
// ==========================================

use crate::calendar::CalendarError;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("请求校验失败: {0}")]
    Validation(String),

    /// date 为出错的公历日期（农历→公历方向时为 None）
    #[error("农历换算失败: {message}")]
    Conversion {
        date: Option<NaiveDate>,
        message: String,
    },
}

impl EngineError {
    /// 公历日期换算失败
    pub fn conversion(date: NaiveDate, err: impl std::fmt::Display) -> Self {
        EngineError::Conversion {
            date: Some(date),
            message: format!("{} ({})", err, date),
        }
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, EngineError::Conversion { .. })
    }
}

impl From<CalendarError> for EngineError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::OutOfRange { date, .. } => EngineError::conversion(date, err),
            other => EngineError::Conversion {
                date: None,
                message: other.to_string(),
            },
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
