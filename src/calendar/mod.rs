// ==========================================
// 喪葬擇日引擎 - 历法层
// ==========================================
// 职责: 公历↔农历换算原语、干支、节气、每日宜忌
// 红线: 纯计算，不做网络/磁盘 I/O
// ==========================================

pub mod almanac;
pub mod error;
pub mod provider;
pub mod traditional;

pub use error::{CalendarError, CalendarResult};
pub use provider::TymeCalendar;
pub use traditional::to_traditional;

use crate::domain::day_facts::LunarDate;
use chrono::NaiveDate;

// ==========================================
// LunarDay - 换算原语的原始输出
// ==========================================
// 字符串字段保持原样，由 LunarDateAdapter 负责解析与归一
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarDay {
    pub lunar: LunarDate,
    pub year_ganzhi: String,
    pub month_ganzhi: String,
    pub day_ganzhi: String,
    /// 当日节气，无则为空串
    pub solar_term: String,
    pub yi: Vec<String>,
    pub ji: Vec<String>,
    pub clash_description: String,
    pub zodiac: String,
}

// ==========================================
// LunarCalendar Trait
// ==========================================
// 用途: 农历换算原语的接口
// 实现者: TymeCalendar（tyme4rs），测试中可替换为桩实现
pub trait LunarCalendar: Send + Sync {
    /// 公历 → 农历（含干支、节气、宜忌、沖煞、生肖）
    fn solar_to_lunar(&self, date: NaiveDate) -> CalendarResult<LunarDay>;

    /// 农历 → 公历
    ///
    /// 该月不存在（如请求闰月但当年无此闰月）或日数超出月长时返回 InvalidLunarDate
    fn lunar_to_solar(&self, year: i32, month: u32, day: u32, leap: bool)
        -> CalendarResult<NaiveDate>;

    /// 指定农历月的天数（29 或 30）
    fn lunar_month_days(&self, year: i32, month: u32, leap: bool) -> CalendarResult<u32>;
}
