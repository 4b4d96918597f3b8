// ==========================================
// 喪葬擇日引擎 - 领域类型定义
// ==========================================
// 天干、地支、生肖、冲突类别、推荐等级、祭祀名称
// 红线: 推荐等级是"等级制",不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 天干 (Heavenly Stem)
// ==========================================
// 10 循环: 甲乙丙丁戊己庚辛壬癸
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl HeavenlyStem {
    pub const ALL: [HeavenlyStem; 10] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];

    /// 按循环序号取天干（自动取模）
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeavenlyStem::Jia => "甲",
            HeavenlyStem::Yi => "乙",
            HeavenlyStem::Bing => "丙",
            HeavenlyStem::Ding => "丁",
            HeavenlyStem::Wu => "戊",
            HeavenlyStem::Ji => "己",
            HeavenlyStem::Geng => "庚",
            HeavenlyStem::Xin => "辛",
            HeavenlyStem::Ren => "壬",
            HeavenlyStem::Gui => "癸",
        }
    }

    /// 从单字解析天干
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().starts_with(c))
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 地支 (Earthly Branch)
// ==========================================
// 12 循环: 子丑寅卯辰巳午未申酉戌亥
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl EarthlyBranch {
    pub const ALL: [EarthlyBranch; 12] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::Wu,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];

    /// 按循环序号取地支（自动取模）
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EarthlyBranch::Zi => "子",
            EarthlyBranch::Chou => "丑",
            EarthlyBranch::Yin => "寅",
            EarthlyBranch::Mao => "卯",
            EarthlyBranch::Chen => "辰",
            EarthlyBranch::Si => "巳",
            EarthlyBranch::Wu => "午",
            EarthlyBranch::Wei => "未",
            EarthlyBranch::Shen => "申",
            EarthlyBranch::You => "酉",
            EarthlyBranch::Xu => "戌",
            EarthlyBranch::Hai => "亥",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.as_str().starts_with(c))
    }

    /// 地支对应的生肖
    pub fn zodiac(&self) -> Zodiac {
        Zodiac::ALL[self.index()]
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 生肖 (Zodiac)
// ==========================================
// 序列化为繁体单字，与前端保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Rat,
        Zodiac::Ox,
        Zodiac::Tiger,
        Zodiac::Rabbit,
        Zodiac::Dragon,
        Zodiac::Snake,
        Zodiac::Horse,
        Zodiac::Goat,
        Zodiac::Monkey,
        Zodiac::Rooster,
        Zodiac::Dog,
        Zodiac::Pig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zodiac::Rat => "鼠",
            Zodiac::Ox => "牛",
            Zodiac::Tiger => "虎",
            Zodiac::Rabbit => "兔",
            Zodiac::Dragon => "龍",
            Zodiac::Snake => "蛇",
            Zodiac::Horse => "馬",
            Zodiac::Goat => "羊",
            Zodiac::Monkey => "猴",
            Zodiac::Rooster => "雞",
            Zodiac::Dog => "狗",
            Zodiac::Pig => "豬",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zodiac {
    type Err = String;

    /// 繁简两种写法均可解析，统一归一为繁体
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "鼠" => Ok(Zodiac::Rat),
            "牛" => Ok(Zodiac::Ox),
            "虎" => Ok(Zodiac::Tiger),
            "兔" => Ok(Zodiac::Rabbit),
            "龍" | "龙" => Ok(Zodiac::Dragon),
            "蛇" => Ok(Zodiac::Snake),
            "馬" | "马" => Ok(Zodiac::Horse),
            "羊" => Ok(Zodiac::Goat),
            "猴" => Ok(Zodiac::Monkey),
            "雞" | "鸡" => Ok(Zodiac::Rooster),
            "狗" => Ok(Zodiac::Dog),
            "豬" | "猪" => Ok(Zodiac::Pig),
            other => Err(format!("未知生肖: {}", other)),
        }
    }
}

impl Serialize for Zodiac {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Zodiac {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==========================================
// 冲突类别 (Conflict Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictCategory {
    ForbiddenDay, // 禁忌日
    ZodiacClash,  // 生肖相沖
}

impl ConflictCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ConflictCategory::ForbiddenDay => "禁忌日",
            ConflictCategory::ZodiacClash => "生肖相沖",
        }
    }
}

impl fmt::Display for ConflictCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictCategory::ForbiddenDay => write!(f, "FORBIDDEN_DAY"),
            ConflictCategory::ZodiacClash => write!(f, "ZODIAC_CLASH"),
        }
    }
}

// ==========================================
// 影响程度 (Severity)
// ==========================================
// 顺序: Minor < Moderate < Severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Minor,    // 輕微
    Moderate, // 中等
    Severe,   // 嚴重
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minor => "輕微",
            Severity::Moderate => "中等",
            Severity::Severe => "嚴重",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Minor => write!(f, "MINOR"),
            Severity::Moderate => write!(f, "MODERATE"),
            Severity::Severe => write!(f, "SEVERE"),
        }
    }
}

// ==========================================
// 推荐等级 (Recommendation Level)
// ==========================================
// 顺序: Forbidden < Unsuitable < Neutral < Suitable < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationLevel {
    Forbidden,  // 禁用
    Unsuitable, // 不宜
    Neutral,    // 普通
    Suitable,   // 適宜
    Excellent,  // 極佳
}

impl RecommendationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationLevel::Forbidden => "禁用",
            RecommendationLevel::Unsuitable => "不宜",
            RecommendationLevel::Neutral => "普通",
            RecommendationLevel::Suitable => "適宜",
            RecommendationLevel::Excellent => "極佳",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationLevel::Forbidden => "FORBIDDEN",
            RecommendationLevel::Unsuitable => "UNSUITABLE",
            RecommendationLevel::Neutral => "NEUTRAL",
            RecommendationLevel::Suitable => "SUITABLE",
            RecommendationLevel::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FORBIDDEN" | "禁用" => Ok(RecommendationLevel::Forbidden),
            "UNSUITABLE" | "不宜" => Ok(RecommendationLevel::Unsuitable),
            "NEUTRAL" | "普通" => Ok(RecommendationLevel::Neutral),
            "SUITABLE" | "適宜" => Ok(RecommendationLevel::Suitable),
            "EXCELLENT" | "極佳" => Ok(RecommendationLevel::Excellent),
            other => Err(format!("未知推荐等级: {}", other)),
        }
    }
}

// ==========================================
// 祭祀名称 (Ritual Name)
// ==========================================
// 固定 9 项: 頭七..滿七、百日、對年
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RitualName {
    FirstSeventh,
    SecondSeventh,
    ThirdSeventh,
    FourthSeventh,
    FifthSeventh,
    SixthSeventh,
    FinalSeventh,
    HundredDay,
    FirstAnniversary,
}

impl RitualName {
    pub const ALL: [RitualName; 9] = [
        RitualName::FirstSeventh,
        RitualName::SecondSeventh,
        RitualName::ThirdSeventh,
        RitualName::FourthSeventh,
        RitualName::FifthSeventh,
        RitualName::SixthSeventh,
        RitualName::FinalSeventh,
        RitualName::HundredDay,
        RitualName::FirstAnniversary,
    ];

    /// 七七祭（按顺序）
    pub const WEEKLY: [RitualName; 7] = [
        RitualName::FirstSeventh,
        RitualName::SecondSeventh,
        RitualName::ThirdSeventh,
        RitualName::FourthSeventh,
        RitualName::FifthSeventh,
        RitualName::SixthSeventh,
        RitualName::FinalSeventh,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RitualName::FirstSeventh => "頭七",
            RitualName::SecondSeventh => "二七",
            RitualName::ThirdSeventh => "三七",
            RitualName::FourthSeventh => "四七",
            RitualName::FifthSeventh => "五七",
            RitualName::SixthSeventh => "六七",
            RitualName::FinalSeventh => "滿七",
            RitualName::HundredDay => "百日",
            RitualName::FirstAnniversary => "對年",
        }
    }
}

impl fmt::Display for RitualName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 做七模式 (Ritual Mode)
// ==========================================
// Traditional: 每七日一祭; Compressed: 每三日一祭（俗称"快七"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RitualMode {
    Traditional,
    Compressed,
}

impl RitualMode {
    /// 七七祭相对歿日的偏移天数
    pub fn weekly_offsets(&self) -> [i64; 7] {
        match self {
            RitualMode::Traditional => [6, 13, 20, 27, 34, 41, 48],
            RitualMode::Compressed => [6, 9, 12, 15, 18, 21, 24],
        }
    }
}

impl From<bool> for RitualMode {
    fn from(traditional: bool) -> Self {
        if traditional {
            RitualMode::Traditional
        } else {
            RitualMode::Compressed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_parse_accepts_simplified() {
        assert_eq!("龙".parse::<Zodiac>().unwrap(), Zodiac::Dragon);
        assert_eq!("龍".parse::<Zodiac>().unwrap(), Zodiac::Dragon);
        assert_eq!(" 猪 ".parse::<Zodiac>().unwrap(), Zodiac::Pig);
        assert!("貓".parse::<Zodiac>().is_err());
    }

    #[test]
    fn test_zodiac_serde_uses_traditional_char() {
        let json = serde_json::to_string(&Zodiac::Horse).unwrap();
        assert_eq!(json, "\"馬\"");
        let parsed: Zodiac = serde_json::from_str("\"马\"").unwrap();
        assert_eq!(parsed, Zodiac::Horse);
    }

    #[test]
    fn test_level_ordering() {
        assert!(RecommendationLevel::Excellent > RecommendationLevel::Suitable);
        assert!(RecommendationLevel::Neutral > RecommendationLevel::Unsuitable);
        assert!(RecommendationLevel::Unsuitable > RecommendationLevel::Forbidden);
        assert_eq!(
            "suitable".parse::<RecommendationLevel>().unwrap(),
            RecommendationLevel::Suitable
        );
    }

    #[test]
    fn test_stem_branch_cycles_wrap() {
        assert_eq!(HeavenlyStem::from_index(10), HeavenlyStem::Jia);
        assert_eq!(HeavenlyStem::from_index(-1), HeavenlyStem::Gui);
        assert_eq!(EarthlyBranch::from_index(13), EarthlyBranch::Chou);
        assert_eq!(EarthlyBranch::from_char('午'), Some(EarthlyBranch::Wu));
        assert_eq!(EarthlyBranch::Wu.zodiac(), Zodiac::Horse);
    }

    #[test]
    fn test_ritual_mode_offsets() {
        assert_eq!(RitualMode::from(true), RitualMode::Traditional);
        assert_eq!(RitualMode::Traditional.weekly_offsets()[6], 48);
        assert_eq!(RitualMode::Compressed.weekly_offsets()[6], 24);
        assert_eq!(RitualName::ALL.len(), 9);
    }
}
