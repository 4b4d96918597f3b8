// ==========================================
// 喪葬擇日引擎 - 干支与生肖对照表
// ==========================================
// 天干相沖、地支相沖、生肖→地支、年干支公式
// 全部为编译期常量，不随请求变化
// ==========================================

use crate::domain::types::{EarthlyBranch, HeavenlyStem, Zodiac};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 对照表
// ==========================================

/// 天干相沖: 甲庚、乙辛、丙壬、丁癸、戊己
pub const HEAVENLY_STEM_CONFLICTS: [(HeavenlyStem, HeavenlyStem); 5] = [
    (HeavenlyStem::Jia, HeavenlyStem::Geng),
    (HeavenlyStem::Yi, HeavenlyStem::Xin),
    (HeavenlyStem::Bing, HeavenlyStem::Ren),
    (HeavenlyStem::Ding, HeavenlyStem::Gui),
    (HeavenlyStem::Wu, HeavenlyStem::Ji),
];

/// 地支六沖: 子午、丑未、寅申、卯酉、辰戌、巳亥
pub const EARTHLY_BRANCH_CONFLICTS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (EarthlyBranch::Zi, EarthlyBranch::Wu),
    (EarthlyBranch::Chou, EarthlyBranch::Wei),
    (EarthlyBranch::Yin, EarthlyBranch::Shen),
    (EarthlyBranch::Mao, EarthlyBranch::You),
    (EarthlyBranch::Chen, EarthlyBranch::Xu),
    (EarthlyBranch::Si, EarthlyBranch::Hai),
];

/// 生肖→地支
pub const ZODIAC_TO_BRANCH: [(Zodiac, EarthlyBranch); 12] = [
    (Zodiac::Rat, EarthlyBranch::Zi),
    (Zodiac::Ox, EarthlyBranch::Chou),
    (Zodiac::Tiger, EarthlyBranch::Yin),
    (Zodiac::Rabbit, EarthlyBranch::Mao),
    (Zodiac::Dragon, EarthlyBranch::Chen),
    (Zodiac::Snake, EarthlyBranch::Si),
    (Zodiac::Horse, EarthlyBranch::Wu),
    (Zodiac::Goat, EarthlyBranch::Wei),
    (Zodiac::Monkey, EarthlyBranch::Shen),
    (Zodiac::Rooster, EarthlyBranch::You),
    (Zodiac::Dog, EarthlyBranch::Xu),
    (Zodiac::Pig, EarthlyBranch::Hai),
];

/// 天干相沖判断
pub fn stem_conflict(stem: HeavenlyStem) -> Option<HeavenlyStem> {
    HEAVENLY_STEM_CONFLICTS.iter().find_map(|&(a, b)| {
        if a == stem {
            Some(b)
        } else if b == stem {
            Some(a)
        } else {
            None
        }
    })
}

/// 地支相沖判断（六沖表双向查找，每个地支恰有一个对沖）
pub fn branch_conflict(branch: EarthlyBranch) -> EarthlyBranch {
    EARTHLY_BRANCH_CONFLICTS
        .iter()
        .find_map(|&(a, b)| {
            if a == branch {
                Some(b)
            } else if b == branch {
                Some(a)
            } else {
                None
            }
        })
        .unwrap_or_else(|| EarthlyBranch::from_index(branch.index() as i64 + 6))
}

/// 生肖转换为地支
pub fn zodiac_to_branch(zodiac: Zodiac) -> EarthlyBranch {
    ZODIAC_TO_BRANCH
        .iter()
        .find(|(z, _)| *z == zodiac)
        .map(|(_, b)| *b)
        .unwrap_or(EarthlyBranch::Zi)
}

/// 计算年份的干支: stem=(year-4) mod 10, branch=(year-4) mod 12
pub fn year_stem_branch(year: i32) -> StemBranch {
    StemBranch::new(
        HeavenlyStem::from_index(year as i64 - 4),
        EarthlyBranch::from_index(year as i64 - 4),
    )
}

// ==========================================
// StemBranch - 六十甲子中的一组干支
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// 按六十甲子序号构造（0 = 甲子）
    pub fn from_cycle_index(index: i64) -> Self {
        Self::new(HeavenlyStem::from_index(index), EarthlyBranch::from_index(index))
    }

    /// 六十甲子序号（0..60）
    ///
    /// 天干、地支奇偶不一致时（如"甲丑"）不属于六十甲子，返回 None
    pub fn cycle_index(&self) -> Option<usize> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // 满足 i ≡ s (mod 10) 且 i ≡ b (mod 12) 的唯一 i
        (0..60).find(|i| i % 10 == s && i % 12 == b)
    }

    pub fn is_valid(&self) -> bool {
        self.cycle_index().is_some()
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for StemBranch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let stem = chars
            .next()
            .and_then(HeavenlyStem::from_char)
            .ok_or_else(|| format!("无效天干: {}", s))?;
        let branch = chars
            .next()
            .and_then(EarthlyBranch::from_char)
            .ok_or_else(|| format!("无效地支: {}", s))?;
        if chars.next().is_some() {
            return Err(format!("干支长度错误: {}", s));
        }
        Ok(Self::new(stem, branch))
    }
}

impl Serialize for StemBranch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StemBranch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// GanZhi - 年、月、日三柱
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
}

impl GanZhi {
    /// 日干
    pub fn day_stem(&self) -> HeavenlyStem {
        self.day.stem
    }

    /// 日支（日干支第二字）
    pub fn day_branch(&self) -> EarthlyBranch {
        self.day.branch
    }
}
