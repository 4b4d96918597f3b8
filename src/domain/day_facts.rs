// ==========================================
// 喪葬擇日引擎 - 农历日期与每日黄历
// ==========================================
// LunarDate 只能由公历换算得到，携带数值型月/日
// DayFacts 每次查询即时计算，不缓存
// ==========================================

use crate::domain::ganzhi::GanZhi;
use crate::domain::types::Zodiac;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const CN_DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "臘月",
];

const DAY_TENS: [&str; 4] = ["初", "十", "廿", "三"];

// ==========================================
// LunarDate - 农历日期
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// 农历年（正月初一换年，年初可能与公历年不同）
    pub year: i32,
    /// 月份 1..=12，闰月与本月同号
    pub month: u32,
    /// 日 1..=30
    pub day: u32,
    /// 是否闰月
    pub is_leap_month: bool,
    /// 月名，如 "冬月"、"閏六月"
    pub month_name: String,
    /// 日名，如 "初二"、"廿九"
    pub day_name: String,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
            month_name: lunar_month_name(month, is_leap_month),
            day_name: lunar_day_name(day),
        }
    }

    /// 年份的汉字写法，如 二〇二五
    pub fn year_name(&self) -> String {
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| CN_DIGITS[d as usize])
            .collect()
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}{}", self.year_name(), self.month_name, self.day_name)
    }
}

/// 农历月名
pub fn lunar_month_name(month: u32, is_leap: bool) -> String {
    let base = MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?月");
    if is_leap {
        format!("閏{}", base)
    } else {
        base.to_string()
    }
}

/// 农历日名: 初一..初十、十一..十九、二十、廿一..廿九、三十
pub fn lunar_day_name(day: u32) -> String {
    match day {
        10 => "初十".to_string(),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        1..=29 => {
            let tens = DAY_TENS[(day / 10) as usize];
            let ones = CN_DIGITS[(day % 10) as usize];
            format!("{}{}", tens, ones)
        }
        _ => format!("{}日", day),
    }
}

// ==========================================
// DayFacts - 某公历日的完整黄历信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFacts {
    /// 公历日期
    pub solar: NaiveDate,
    /// 农历日期
    pub lunar: LunarDate,
    /// 农历日期显示串
    pub lunar_text: String,
    /// 年、月、日干支
    pub ganzhi: GanZhi,
    /// 当日节气（无则为空串）
    pub solar_term: String,
    /// 宜
    pub yi: Vec<String>,
    /// 忌
    pub ji: Vec<String>,
    /// 沖煞描述
    pub clash_description: String,
    /// 年生肖
    pub zodiac: Zodiac,
}
