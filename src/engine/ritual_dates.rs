// ==========================================
// 喪葬擇日引擎 - 做七/百日/對年日期计算
// ==========================================
// 七七祭: 歿日 + 偏移（传统每七日，快七每三日）
// 百日: 歿日 + 99 天，纯公历加法
// 對年: 歿日农历月日在次一农历年的对应日
//   - 歿于闰月时按本月（非闰）计算
//   - 次年该月为小月而歿日为三十时，取该月最后一日
// ==========================================

use crate::domain::ritual::{RitualDate, RitualDateSet};
use crate::domain::types::{RitualMode, RitualName};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::lunar_adapter::LunarDateAdapter;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{instrument, warn};

/// 百日祭偏移天数
pub const HUNDRED_DAY_OFFSET: i64 = 99;

/// 做七日期计算器
#[derive(Debug, Clone)]
pub struct RitualDateCalculator {
    adapter: Arc<LunarDateAdapter>,
}

impl RitualDateCalculator {
    pub fn new(adapter: Arc<LunarDateAdapter>) -> Self {
        Self { adapter }
    }

    /// 计算 9 个祭日
    ///
    /// # 参数
    /// - death_date: 歿日（公历）
    /// - traditional_mode: true=每七日一祭，false=快七
    ///
    /// # 错误
    /// - EngineError::Validation: 祭日超出可表示的日期范围
    /// - EngineError::Conversion: 任一日期农历换算失败（无兜底，直接返回）
    #[instrument(skip(self))]
    pub fn compute_ritual_dates(
        &self,
        death_date: NaiveDate,
        traditional_mode: bool,
    ) -> EngineResult<RitualDateSet> {
        let mode = RitualMode::from(traditional_mode);

        let mut solar_dates = Vec::with_capacity(RitualName::ALL.len());
        for offset in mode.weekly_offsets() {
            solar_dates.push(offset_date(death_date, offset)?);
        }
        solar_dates.push(offset_date(death_date, HUNDRED_DAY_OFFSET)?);
        solar_dates.push(self.first_anniversary(death_date)?);

        let mut dates = Vec::with_capacity(solar_dates.len());
        for solar in solar_dates {
            let facts = self.adapter.resolve(solar)?;
            dates.push(RitualDate {
                lunar: facts.lunar_text,
                solar,
            });
        }

        let dates: [RitualDate; 9] = dates
            .try_into()
            .map_err(|_| EngineError::Validation("祭日數量不符".to_string()))?;
        Ok(RitualDateSet::new(death_date, mode, dates))
    }

    /// 對年: 次一农历年同月同日
    pub fn first_anniversary(&self, death_date: NaiveDate) -> EngineResult<NaiveDate> {
        let lunar = self.adapter.resolve(death_date)?.lunar;
        let year = lunar.year + 1;

        if lunar.is_leap_month {
            warn!(
                death_date = %death_date,
                month = lunar.month,
                "歿于闰月，對年按本月计算"
            );
        }

        let month_days = self.adapter.lunar_month_days(year, lunar.month, false)?;
        let day = if lunar.day > month_days {
            warn!(
                death_date = %death_date,
                lunar_day = lunar.day,
                month_days,
                "次年该月无此日，對年取月末"
            );
            month_days
        } else {
            lunar.day
        };

        self.adapter.lunar_to_solar(year, lunar.month, day, false)
    }
}

fn offset_date(base: NaiveDate, days: i64) -> EngineResult<NaiveDate> {
    base.checked_add_signed(Duration::days(days)).ok_or_else(|| {
        EngineError::Validation(format!("日期 {} 加 {} 天超出範圍", base, days))
    })
}
