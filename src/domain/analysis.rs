// ==========================================
// 喪葬擇日引擎 - 冲突与择日分析结果
// ==========================================
// Conflict 创建后不再修改，仅供评分器消费
// ==========================================

use crate::domain::day_facts::DayFacts;
use crate::domain::types::{ConflictCategory, RecommendationLevel, Severity, Zodiac};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Conflict - 冲突发现
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub category: ConflictCategory,
    pub explanation: String,
    pub severity: Severity,
}

impl Conflict {
    pub fn new(category: ConflictCategory, explanation: impl Into<String>, severity: Severity) -> Self {
        Self {
            category,
            explanation: explanation.into(),
            severity,
        }
    }

    /// 中文标签形式，如 "[嚴重·生肖相沖] 亡者生肖鼠與日支午相沖"
    pub fn labeled(&self) -> String {
        format!(
            "[{}·{}] {}",
            self.severity.label(),
            self.category.label(),
            self.explanation
        )
    }
}

// ==========================================
// DateAnalysis - 单日分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAnalysis {
    pub date: NaiveDate,
    pub facts: DayFacts,
    pub conflicts: Vec<Conflict>,
    pub level: RecommendationLevel,
    /// 推荐理由
    pub rationale: String,
    /// 注意事项
    pub notes: Vec<String>,
}

impl DateAnalysis {
    /// 单行摘要: 日期、等级、农历、沖煞及冲突
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} {} {} {}",
            self.date,
            self.level.label(),
            self.facts.lunar_text,
            self.facts.clash_description
        );
        for conflict in &self.conflicts {
            line.push_str("；");
            line.push_str(&conflict.labeled());
        }
        line
    }
}

// ==========================================
// AuspiciousDayRequest - 吉日查询条件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuspiciousDayRequest {
    /// 亡者生肖
    pub deceased_zodiac: Zodiac,
    /// 亡者歿日
    pub death_date: NaiveDate,
    /// 家属生肖
    #[serde(default)]
    pub family_zodiacs: Vec<Zodiac>,
    /// 查询起始日期（含）
    pub start_date: NaiveDate,
    /// 查询结束日期（含）
    pub end_date: NaiveDate,
}

impl AuspiciousDayRequest {
    /// 查询区间天数（闭区间）
    pub fn range_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

// ==========================================
// AuspiciousDayResponse - 吉日推荐结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuspiciousDayResponse {
    pub query_id: String,
    pub query_criteria: AuspiciousDayRequest,
    pub recommended_dates: Vec<DateAnalysis>,
    /// 总体建议
    pub overall_advice: String,
    pub queried_at: DateTime<Utc>,
}
