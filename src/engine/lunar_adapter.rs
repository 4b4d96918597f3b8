// ==========================================
// 喪葬擇日引擎 - 农历适配器
// ==========================================
// 职责: 调用一次换算原语，将其输出归一为 DayFacts
// 输入: 公历日期
// 输出: DayFacts（干支已解析为强类型，字符串经繁体归一）
// 红线: 不做网络/磁盘 I/O，不缓存
// ==========================================

use crate::calendar::{to_traditional, LunarCalendar, LunarDay, TymeCalendar};
use crate::domain::day_facts::{DayFacts, LunarDate};
use crate::domain::ganzhi::{year_stem_branch, GanZhi, StemBranch};
use crate::domain::types::Zodiac;
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// 文字归一函数（如简体→繁体），视为不透明的纯函数注入
pub type TextNormalizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// 恒等归一
pub fn identity_normalizer() -> TextNormalizer {
    Arc::new(|s: &str| s.to_string())
}

/// 黄历词汇简体 → 繁体
pub fn traditional_normalizer() -> TextNormalizer {
    Arc::new(to_traditional)
}

// ==========================================
// LunarDateAdapter - 农历适配器
// ==========================================
#[derive(Clone)]
pub struct LunarDateAdapter {
    calendar: Arc<dyn LunarCalendar>,
    normalizer: TextNormalizer,
}

impl LunarDateAdapter {
    /// 创建适配器（恒等归一）
    pub fn new(calendar: Arc<dyn LunarCalendar>) -> Self {
        Self {
            calendar,
            normalizer: identity_normalizer(),
        }
    }

    /// 替换文字归一函数
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    fn normalize(&self, text: &str) -> String {
        (self.normalizer)(text)
    }

    /// 解析某公历日的完整黄历信息
    ///
    /// # 错误
    /// - EngineError::Conversion: 原语拒绝该日期，或输出的干支/生肖无法解析
    pub fn resolve(&self, date: NaiveDate) -> EngineResult<DayFacts> {
        let raw = self
            .calendar
            .solar_to_lunar(date)
            .map_err(|e| EngineError::conversion(date, e))?;

        let facts = self.normalize_day(date, raw)?;
        debug!(
            date = %date,
            lunar = %facts.lunar_text,
            day_ganzhi = %facts.ganzhi.day,
            "农历解析完成"
        );
        Ok(facts)
    }

    fn normalize_day(&self, date: NaiveDate, raw: LunarDay) -> EngineResult<DayFacts> {
        let parse_pillar = |label: &str, text: &str| -> EngineResult<StemBranch> {
            self.normalize(text)
                .parse::<StemBranch>()
                .map_err(|e| EngineError::conversion(date, format!("{}干支无效: {}", label, e)))
        };

        let ganzhi = GanZhi {
            year: parse_pillar("年", &raw.year_ganzhi)?,
            month: parse_pillar("月", &raw.month_ganzhi)?,
            day: parse_pillar("日", &raw.day_ganzhi)?,
        };

        let expected_year = year_stem_branch(raw.lunar.year);
        if ganzhi.year != expected_year {
            warn!(
                target: "data_quality",
                date = %date,
                lunar_year = raw.lunar.year,
                reported = %ganzhi.year,
                expected = %expected_year,
                "年干支与农历年不符"
            );
        }

        let zodiac = self
            .normalize(&raw.zodiac)
            .parse::<Zodiac>()
            .map_err(|e| EngineError::conversion(date, e))?;

        let lunar_text = self.normalize(&raw.lunar.to_string());
        let lunar = LunarDate {
            month_name: self.normalize(&raw.lunar.month_name),
            day_name: self.normalize(&raw.lunar.day_name),
            ..raw.lunar
        };

        Ok(DayFacts {
            solar: date,
            lunar,
            lunar_text,
            ganzhi,
            solar_term: self.normalize(&raw.solar_term),
            yi: raw.yi.iter().map(|s| self.normalize(s)).collect(),
            ji: raw.ji.iter().map(|s| self.normalize(s)).collect(),
            clash_description: self.normalize(&raw.clash_description),
            zodiac,
        })
    }

    /// 农历 → 公历
    pub fn lunar_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    ) -> EngineResult<NaiveDate> {
        Ok(self.calendar.lunar_to_solar(year, month, day, leap)?)
    }

    /// 农历月天数
    pub fn lunar_month_days(&self, year: i32, month: u32, leap: bool) -> EngineResult<u32> {
        Ok(self.calendar.lunar_month_days(year, month, leap)?)
    }
}

/// tyme4rs 原语 + 繁体归一
impl Default for LunarDateAdapter {
    fn default() -> Self {
        Self::new(Arc::new(TymeCalendar::new())).with_normalizer(traditional_normalizer())
    }
}

impl std::fmt::Debug for LunarDateAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LunarDateAdapter").finish_non_exhaustive()
    }
}
