// ==========================================
// 喪葬擇日引擎 - 生肖相沖判定
// ==========================================
// 亡者生肖地支的对冲支 == 日支 → 严重
// 每位家属各自判定 → 中等，多位家属各出一条，不去重
// ==========================================

use crate::domain::analysis::Conflict;
use crate::domain::day_facts::DayFacts;
use crate::domain::ganzhi::{branch_conflict, zodiac_to_branch};
use crate::domain::types::{ConflictCategory, EarthlyBranch, Severity, Zodiac};

/// 生肖相沖判定器
#[derive(Debug, Clone, Copy, Default)]
pub struct ZodiacConflictChecker;

impl ZodiacConflictChecker {
    pub fn new() -> Self {
        Self
    }

    /// 某生肖是否与该日支相沖
    pub fn clashes(zodiac: Zodiac, day_branch: EarthlyBranch) -> bool {
        branch_conflict(zodiac_to_branch(zodiac)) == day_branch
    }

    pub fn check_zodiac_conflicts(
        &self,
        facts: &DayFacts,
        deceased: Zodiac,
        family: &[Zodiac],
    ) -> Vec<Conflict> {
        let day_branch = facts.ganzhi.day_branch();
        let mut conflicts = Vec::new();

        if Self::clashes(deceased, day_branch) {
            conflicts.push(Conflict::new(
                ConflictCategory::ZodiacClash,
                format!("亡者生肖{}與日支{}相沖", deceased, day_branch),
                Severity::Severe,
            ));
        }

        conflicts.extend(
            family
                .iter()
                .filter(|z| Self::clashes(**z, day_branch))
                .map(|z| {
                    Conflict::new(
                        ConflictCategory::ZodiacClash,
                        format!("家屬生肖{}與日支{}相沖", z, day_branch),
                        Severity::Moderate,
                    )
                }),
        );

        conflicts
    }
}
