// ==========================================
// 喪葬擇日引擎 - 推荐等级评分
// ==========================================
// 决策表（按顺序，命中即止）:
// 1. 任一严重冲突 → 禁用
// 2. 中等冲突 > 1 → 不宜
// 3. 恰一条中等冲突 且 忌含喪葬事项 → 不宜
// 4. 宜含喪葬事项 且 忌不含 → 极佳
// 5. 宜含喪葬事项 → 适宜
// 6. 其余 → 普通
// ==========================================

use crate::domain::analysis::Conflict;
use crate::domain::day_facts::DayFacts;
use crate::domain::types::{RecommendationLevel, Severity};

/// 与喪葬相关的宜忌事项
pub const FUNERAL_ACTIVITIES: [&str; 3] = ["祭祀", "安葬", "入殮"];

fn mentions_funeral_activity(items: &[String]) -> bool {
    items
        .iter()
        .any(|item| FUNERAL_ACTIVITIES.contains(&item.as_str()))
}

/// 推荐等级评分器
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationScorer;

impl RecommendationScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, conflicts: &[Conflict], yi: &[String], ji: &[String]) -> RecommendationLevel {
        if conflicts.iter().any(|c| c.severity == Severity::Severe) {
            return RecommendationLevel::Forbidden;
        }

        let moderate = conflicts
            .iter()
            .filter(|c| c.severity == Severity::Moderate)
            .count();
        let ji_hit = mentions_funeral_activity(ji);

        if moderate > 1 || (moderate == 1 && ji_hit) {
            return RecommendationLevel::Unsuitable;
        }

        match (mentions_funeral_activity(yi), ji_hit) {
            (true, false) => RecommendationLevel::Excellent,
            (true, true) => RecommendationLevel::Suitable,
            _ => RecommendationLevel::Neutral,
        }
    }

    /// 推荐理由
    pub fn rationale(&self, level: RecommendationLevel) -> &'static str {
        match level {
            RecommendationLevel::Forbidden => "此日期有嚴重禁忌，不建議使用",
            RecommendationLevel::Unsuitable => "此日期有較多沖煞，建議另擇他日",
            RecommendationLevel::Excellent => "此日期非常適合舉行儀式，無明顯沖煞",
            RecommendationLevel::Suitable => "此日期適合舉行儀式，但需注意部分事項",
            RecommendationLevel::Neutral => "此日期尚可，但建議優先考慮其他更適合的日期",
        }
    }

    /// 注意事项: 宜、忌、沖煞，再逐条附上冲突说明
    pub fn notes(&self, conflicts: &[Conflict], facts: &DayFacts) -> Vec<String> {
        let mut notes = Vec::with_capacity(3 + conflicts.len());
        if !facts.yi.is_empty() {
            notes.push(format!("宜：{}", facts.yi.join(", ")));
        }
        if !facts.ji.is_empty() {
            notes.push(format!("忌：{}", facts.ji.join(", ")));
        }
        if !facts.clash_description.is_empty() {
            notes.push(format!("沖煞：{}", facts.clash_description));
        }
        notes.extend(conflicts.iter().map(|c| c.explanation.clone()));
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ConflictCategory;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn conflict(severity: Severity) -> Conflict {
        Conflict::new(ConflictCategory::ZodiacClash, "測試", severity)
    }

    #[test]
    fn test_severe_always_forbidden() {
        let scorer = RecommendationScorer::new();
        let level = scorer.score(&[conflict(Severity::Severe)], &strings(&["安葬"]), &[]);
        assert_eq!(level, RecommendationLevel::Forbidden);
    }

    #[test]
    fn test_two_moderate_unsuitable() {
        let scorer = RecommendationScorer::new();
        let conflicts = [conflict(Severity::Moderate), conflict(Severity::Moderate)];
        assert_eq!(
            scorer.score(&conflicts, &strings(&["安葬"]), &[]),
            RecommendationLevel::Unsuitable
        );
    }

    #[test]
    fn test_one_moderate() {
        let scorer = RecommendationScorer::new();
        let conflicts = [conflict(Severity::Moderate)];
        assert_eq!(
            scorer.score(&conflicts, &[], &strings(&["入殮"])),
            RecommendationLevel::Unsuitable
        );
        // 忌中无喪葬事项时继续往下判
        assert_eq!(
            scorer.score(&conflicts, &strings(&["祭祀"]), &strings(&["嫁娶"])),
            RecommendationLevel::Excellent
        );
    }

    #[test]
    fn test_yi_ji_rules() {
        let scorer = RecommendationScorer::new();
        assert_eq!(scorer.score(&[], &strings(&["安葬"]), &[]), RecommendationLevel::Excellent);
        assert_eq!(
            scorer.score(&[], &strings(&["安葬"]), &strings(&["祭祀"])),
            RecommendationLevel::Suitable
        );
        assert_eq!(scorer.score(&[], &[], &[]), RecommendationLevel::Neutral);
        assert_eq!(
            scorer.score(&[], &strings(&["嫁娶"]), &[]),
            RecommendationLevel::Neutral
        );
    }

    #[test]
    fn test_rationale_per_level() {
        let scorer = RecommendationScorer::new();
        assert!(scorer.rationale(RecommendationLevel::Forbidden).contains("嚴重禁忌"));
        assert!(scorer.rationale(RecommendationLevel::Excellent).contains("非常適合"));
    }
}
