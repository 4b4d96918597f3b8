// ==========================================
// 喪葬擇日引擎 - tyme4rs 历法实现
// ==========================================
// 职责: 以 tyme4rs 的农历、干支、节气、宜忌数据实现 LunarCalendar
// 输出: 原样简体字符串（繁体归一由适配器注入的归一函数负责）
// 范围: 公历 1600-9999 年；农历年 1600-9998
// ==========================================

use chrono::{Datelike, NaiveDate};
use tracing::trace;
use tyme4rs::tyme::lunar::{LunarDay as TymeLunarDay, LunarMonth, LunarYear};
use tyme4rs::tyme::solar::SolarDay;
use tyme4rs::tyme::Culture;

use crate::calendar::almanac::clash_description;
use crate::calendar::error::{CalendarError, CalendarResult};
use crate::calendar::{LunarCalendar, LunarDay};
use crate::domain::day_facts::LunarDate;
use crate::domain::ganzhi::StemBranch;

/// 支持的公历年份下限（格里历之后）
pub const MIN_YEAR: i32 = 1600;
/// 支持的公历年份上限
pub const MAX_YEAR: i32 = 9999;
/// 农历年上限（次年正月须仍落在公历 9999 年内）
const MAX_LUNAR_YEAR: i32 = MAX_YEAR - 1;

/// tyme 以负数月份表示闰月
fn signed_month(month: u32, leap: bool) -> isize {
    if leap {
        -(month as isize)
    } else {
        month as isize
    }
}

// ==========================================
// TymeCalendar - 基于 tyme4rs 的农历原语
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct TymeCalendar;

impl TymeCalendar {
    pub fn new() -> Self {
        Self
    }

    fn check_range(date: NaiveDate) -> CalendarResult<()> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(())
        } else {
            Err(CalendarError::OutOfRange {
                date,
                min_year: MIN_YEAR,
                max_year: MAX_YEAR,
            })
        }
    }

    /// 校验农历年月并返回 tyme 月对象
    ///
    /// tyme 对非法年月直接 panic，因此所有参数须先在此校验
    fn month_of(year: i32, month: u32, leap: bool) -> CalendarResult<LunarMonth> {
        if !(MIN_YEAR..=MAX_LUNAR_YEAR).contains(&year) {
            return Err(CalendarError::LunarYearOutOfRange(year));
        }
        let invalid = CalendarError::InvalidLunarDate {
            year,
            month,
            day: 1,
            leap,
        };
        if !(1..=12).contains(&month) {
            return Err(invalid);
        }
        if leap {
            let leap_month = LunarYear::from_year(year as isize).get_leap_month() as u32;
            if leap_month != month {
                return Err(invalid);
            }
        }

        Ok(LunarMonth::from_ym(year as isize, signed_month(month, leap)))
    }

    fn solar_day(date: NaiveDate) -> SolarDay {
        SolarDay::from_ymd(date.year() as isize, date.month() as usize, date.day() as usize)
    }

    fn to_naive(day: &SolarDay) -> CalendarResult<NaiveDate> {
        let (year, month, day_of_month) =
            (day.get_year() as i32, day.get_month() as u32, day.get_day() as u32);
        NaiveDate::from_ymd_opt(year, month, day_of_month).ok_or_else(|| {
            CalendarError::Provider(format!("公历日期无效: {}-{}-{}", year, month, day_of_month))
        })
    }
}

impl LunarCalendar for TymeCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> CalendarResult<LunarDay> {
        Self::check_range(date)?;

        let solar = Self::solar_day(date);
        let lunar_day = solar.get_lunar_day();
        let lunar_month = lunar_day.get_lunar_month();
        let lunar = LunarDate::new(
            lunar_day.get_year() as i32,
            lunar_month.get_month() as u32,
            lunar_day.get_day() as u32,
            lunar_month.is_leap(),
        );

        // 年干支按正月初一换年，月干支按节令换月
        let year_cycle = LunarYear::from_year(lunar_day.get_year()).get_sixty_cycle();
        let month_cycle = lunar_day.get_month_sixty_cycle();
        let day_cycle = lunar_day.get_sixty_cycle();

        let day_ganzhi = day_cycle.get_name();
        let clash = day_ganzhi
            .parse::<StemBranch>()
            .map(clash_description)
            .map_err(|e| CalendarError::Provider(format!("日干支无效: {}", e)))?;

        let term_day = solar.get_term_day();
        let solar_term = if term_day.get_day_index() == 0 {
            term_day.get_solar_term().get_name()
        } else {
            String::new()
        };

        trace!(date = %date, lunar = %lunar, "tyme 农历换算");

        Ok(LunarDay {
            lunar,
            year_ganzhi: year_cycle.get_name(),
            month_ganzhi: month_cycle.get_name(),
            day_ganzhi,
            solar_term,
            yi: lunar_day.get_recommends().iter().map(|t| t.get_name()).collect(),
            ji: lunar_day.get_avoids().iter().map(|t| t.get_name()).collect(),
            clash_description: clash,
            zodiac: year_cycle.get_earth_branch().get_zodiac().get_name(),
        })
    }

    fn lunar_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    ) -> CalendarResult<NaiveDate> {
        let lunar_month = Self::month_of(year, month, leap)?;
        if day == 0 || day > lunar_month.get_day_count() as u32 {
            return Err(CalendarError::InvalidLunarDate {
                year,
                month,
                day,
                leap,
            });
        }

        let solar = TymeLunarDay::from_ymd(year as isize, signed_month(month, leap), day as usize)
            .get_solar_day();
        let date = Self::to_naive(&solar)?;
        Self::check_range(date)?;
        Ok(date)
    }

    fn lunar_month_days(&self, year: i32, month: u32, leap: bool) -> CalendarResult<u32> {
        Ok(Self::month_of(year, month, leap)?.get_day_count() as u32)
    }
}
