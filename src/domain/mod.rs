// ==========================================
// 喪葬擇日引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、干支对照表
// 红线: 不含历法计算逻辑,不含引擎逻辑
// ==========================================

pub mod analysis;
pub mod day_facts;
pub mod ganzhi;
pub mod ritual;
pub mod types;

// 重导出核心类型
pub use analysis::{AuspiciousDayRequest, AuspiciousDayResponse, Conflict, DateAnalysis};
pub use day_facts::{DayFacts, LunarDate};
pub use ganzhi::{GanZhi, StemBranch};
pub use ritual::{RitualDate, RitualDateSet};
pub use types::{
    ConflictCategory, EarthlyBranch, HeavenlyStem, RecommendationLevel, RitualMode, RitualName,
    Severity, Zodiac,
};
