// ==========================================
// 喪葬擇日引擎 - 沖煞
// ==========================================
// 沖: 日支对沖之生肖，日干 +4 为沖干
// 煞: 按三合局，申子辰煞南、巳酉丑煞東、寅午戌煞北、亥卯未煞西
// ==========================================

use crate::domain::ganzhi::{branch_conflict, StemBranch};
use crate::domain::types::{EarthlyBranch, HeavenlyStem};

/// 煞方
pub fn sha_direction(day_branch: EarthlyBranch) -> &'static str {
    const DIRECTIONS: [&str; 4] = ["南", "東", "北", "西"];
    DIRECTIONS[day_branch.index() % 4]
}

/// 沖煞描述，如 "沖馬(戊午)煞南"
pub fn clash_description(day: StemBranch) -> String {
    let clash_branch = branch_conflict(day.branch);
    let clash_stem = HeavenlyStem::from_index(day.stem.index() as i64 + 4);
    format!(
        "沖{}({}{})煞{}",
        clash_branch.zodiac(),
        clash_stem,
        clash_branch,
        sha_direction(day.branch)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clash_description() {
        let day = StemBranch::from_cycle_index(0); // 甲子
        assert_eq!(clash_description(day), "沖馬(戊午)煞南");
        let day: StemBranch = "戊午".parse().unwrap();
        assert_eq!(clash_description(day), "沖鼠(壬子)煞北");
    }

    #[test]
    fn test_sha_direction_follows_triad() {
        assert_eq!(sha_direction(EarthlyBranch::Shen), "南");
        assert_eq!(sha_direction(EarthlyBranch::You), "東");
        assert_eq!(sha_direction(EarthlyBranch::Xu), "北");
        assert_eq!(sha_direction(EarthlyBranch::Hai), "西");
    }
}
