// ==========================================
// 喪葬擇日引擎 - 历法模块错误类型
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// 历法换算错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("日期超出支持范围 ({min_year}-{max_year}): {date}")]
    OutOfRange {
        date: NaiveDate,
        min_year: i32,
        max_year: i32,
    },

    #[error("农历年份超出支持范围: {0}")]
    LunarYearOutOfRange(i32),

    #[error("无效农历日期: {year}年{month}月{day}日 (闰月={leap})")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },

    #[error("历法库输出异常: {0}")]
    Provider(String),
}

/// Result 类型别名
pub type CalendarResult<T> = Result<T, CalendarError>;
