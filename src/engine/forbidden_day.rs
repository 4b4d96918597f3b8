// ==========================================
// 喪葬擇日引擎 - 禁忌日判定
// ==========================================
// 重喪日: 每个农历月对应一个天干，日干与之相同即为重喪日
// 月→干: 1甲 2乙 3戊 4丙 5丁 6己 7庚 8辛 9戊 10壬 11癸 12己
// 输入异常时放行（返回 None）并记录数据质量告警
// ==========================================

use crate::domain::analysis::Conflict;
use crate::domain::day_facts::{lunar_month_name, DayFacts};
use crate::domain::types::{ConflictCategory, HeavenlyStem, Severity};
use tracing::warn;

/// 重喪日天干表（下标 0 = 正月）
pub const DOUBLE_MOURNING_STEMS: [HeavenlyStem; 12] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Wu,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Wu,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
    HeavenlyStem::Ji,
];

/// 某农历月的重喪日天干
pub fn double_mourning_stem(lunar_month: u32) -> Option<HeavenlyStem> {
    DOUBLE_MOURNING_STEMS
        .get((lunar_month as usize).checked_sub(1)?)
        .copied()
}

// ==========================================
// ForbiddenDayEvaluator - 禁忌日判定器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ForbiddenDayEvaluator;

impl ForbiddenDayEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// 重喪日判定
    ///
    /// # 参数
    /// - lunar_month: 农历月 1..=12（闰月按本月）
    /// - day_stem: 日干（单字）
    ///
    /// # 返回
    /// - Some(Conflict): 重喪日，严重程度 Severe
    /// - None: 非重喪日，或输入无法识别（记 data_quality 告警）
    pub fn check_forbidden(&self, lunar_month: u32, day_stem: &str) -> Option<Conflict> {
        let Some(expected) = double_mourning_stem(lunar_month) else {
            warn!(
                target: "data_quality",
                lunar_month,
                "农历月份无法识别，跳过重喪日判定"
            );
            return None;
        };

        let mut chars = day_stem.trim().chars();
        let stem = match (chars.next().and_then(HeavenlyStem::from_char), chars.next()) {
            (Some(stem), None) => stem,
            _ => {
                warn!(
                    target: "data_quality",
                    day_stem,
                    "日干无法识别，跳过重喪日判定"
                );
                return None;
            }
        };

        if stem != expected {
            return None;
        }

        Some(Conflict::new(
            ConflictCategory::ForbiddenDay,
            format!("重喪日：{}逢{}日", lunar_month_name(lunar_month, false), stem),
            Severity::Severe,
        ))
    }

    /// 对某日黄历做重喪日判定
    pub fn check_day(&self, facts: &DayFacts) -> Option<Conflict> {
        self.check_forbidden(facts.lunar.month, facts.ganzhi.day_stem().as_str())
    }
}
