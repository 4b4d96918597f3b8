// ==========================================
// 喪葬擇日引擎 - 核心库
// ==========================================
// 功能: 依农历、干支、重喪日与生肖相沖推荐喪葬吉日，计算做七/百日/對年日期
// 系统定位: 纯计算内核（无数据库、无网络）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 历法层 - 农历换算原语
pub mod calendar;

// 引擎层 - 择日规则
pub mod engine;

// 配置层 - 服务配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ConflictCategory, EarthlyBranch, HeavenlyStem, RecommendationLevel, RitualMode, RitualName,
    Severity, Zodiac,
};

// 领域实体
pub use domain::{
    AuspiciousDayRequest, AuspiciousDayResponse, Conflict, DateAnalysis, DayFacts, GanZhi,
    LunarDate, RitualDate, RitualDateSet, StemBranch,
};

// 历法
pub use calendar::{CalendarError, LunarCalendar, TymeCalendar};

// 引擎
pub use engine::{
    DateRangeRecommender, EngineError, ForbiddenDayEvaluator, LunarDateAdapter,
    RecommendationScorer, RitualDateCalculator, ZodiacConflictChecker,
};

// 配置
pub use config::{AlmanacConfig, AlmanacConfigReader, ConfigManager};

// API
pub use api::{AlmanacApi, ApiError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "喪葬擇日引擎";
