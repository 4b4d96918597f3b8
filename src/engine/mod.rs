// ==========================================
// 喪葬擇日引擎 - 引擎层
// ==========================================
// 职责: 农历解析、禁忌判定、生肖相沖、评分、区间择日、祭日计算
// 红线: 所有组件无状态，判定结果必须带说明文字
// ==========================================

pub mod conflict_checker;
pub mod error;
pub mod forbidden_day;
pub mod lunar_adapter;
pub mod recommender;
pub mod ritual_dates;
pub mod scorer;

// 重导出核心引擎
pub use conflict_checker::ZodiacConflictChecker;
pub use error::{EngineError, EngineResult};
pub use forbidden_day::ForbiddenDayEvaluator;
pub use lunar_adapter::{
    identity_normalizer, traditional_normalizer, LunarDateAdapter, TextNormalizer,
};
pub use recommender::{validate_request, DateRangeRecommender};
pub use ritual_dates::RitualDateCalculator;
pub use scorer::{RecommendationScorer, FUNERAL_ACTIVITIES};
