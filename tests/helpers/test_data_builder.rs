// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{Duration, NaiveDate};
use mourning_almanac::domain::analysis::AuspiciousDayRequest;
use mourning_almanac::domain::day_facts::DayFacts;
use mourning_almanac::domain::types::Zodiac;
use mourning_almanac::engine::LunarDateAdapter;
use std::sync::Arc;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 内置 tyme4rs 历法适配器（繁体归一）
pub fn adapter() -> Arc<LunarDateAdapter> {
    mourning_almanac::logging::init_test();
    Arc::new(LunarDateAdapter::default())
}

/// 从 start 起 limit 天内找第一个满足条件的日子
pub fn find_day<F>(start: NaiveDate, limit: i64, pred: F) -> DayFacts
where
    F: Fn(&DayFacts) -> bool,
{
    let adapter = adapter();
    (0..limit)
        .map(|i| adapter.resolve(start + Duration::days(i)).unwrap())
        .find(|facts| pred(facts))
        .expect("区间内没有满足条件的日子")
}

// ==========================================
// AuspiciousDayRequest 构建器
// ==========================================

pub struct RequestBuilder {
    deceased_zodiac: Zodiac,
    death_date: NaiveDate,
    family_zodiacs: Vec<Zodiac>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl RequestBuilder {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            deceased_zodiac: Zodiac::Rat,
            death_date: ymd(2025, 1, 1),
            family_zodiacs: Vec::new(),
            start_date: start,
            end_date: end,
        }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn deceased(mut self, zodiac: Zodiac) -> Self {
        self.deceased_zodiac = zodiac;
        self
    }

    pub fn family(mut self, zodiacs: &[Zodiac]) -> Self {
        self.family_zodiacs = zodiacs.to_vec();
        self
    }

    pub fn death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = date;
        self
    }

    pub fn build(self) -> AuspiciousDayRequest {
        AuspiciousDayRequest {
            deceased_zodiac: self.deceased_zodiac,
            death_date: self.death_date,
            family_zodiacs: self.family_zodiacs,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
