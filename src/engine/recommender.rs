// ==========================================
// 喪葬擇日引擎 - 区间择日
// ==========================================
// 流程: 逐日 农历解析 → 重喪日 → 生肖相沖 → 评分 → 理由/注意事项
// 区间为闭区间 [start, end]；只保留 >= min_level 的日子，按日期升序
// 单日换算失败: 跳过并记 warn，不中断整个区间
// ==========================================

use crate::domain::analysis::{AuspiciousDayRequest, DateAnalysis};
use crate::domain::types::RecommendationLevel;
use crate::engine::conflict_checker::ZodiacConflictChecker;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::forbidden_day::ForbiddenDayEvaluator;
use crate::engine::lunar_adapter::LunarDateAdapter;
use crate::engine::scorer::RecommendationScorer;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// 校验请求: 起始日不得晚于结束日
pub fn validate_request(request: &AuspiciousDayRequest) -> EngineResult<()> {
    if request.start_date > request.end_date {
        return Err(EngineError::Validation(format!(
            "查詢起始日期 {} 晚於結束日期 {}",
            request.start_date, request.end_date
        )));
    }
    Ok(())
}

// ==========================================
// DateRangeRecommender - 区间择日器
// ==========================================
#[derive(Debug, Clone)]
pub struct DateRangeRecommender {
    adapter: Arc<LunarDateAdapter>,
    forbidden: ForbiddenDayEvaluator,
    checker: ZodiacConflictChecker,
    scorer: RecommendationScorer,
    min_level: RecommendationLevel,
}

impl DateRangeRecommender {
    /// 创建择日器（默认只保留"极佳"）
    pub fn new(adapter: Arc<LunarDateAdapter>) -> Self {
        Self {
            adapter,
            forbidden: ForbiddenDayEvaluator::new(),
            checker: ZodiacConflictChecker::new(),
            scorer: RecommendationScorer::new(),
            min_level: RecommendationLevel::Excellent,
        }
    }

    /// 设置最低保留等级
    pub fn with_min_level(mut self, min_level: RecommendationLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn min_level(&self) -> RecommendationLevel {
        self.min_level
    }

    /// 分析单日
    pub fn analyze_date(
        &self,
        date: NaiveDate,
        request: &AuspiciousDayRequest,
    ) -> EngineResult<DateAnalysis> {
        let facts = self.adapter.resolve(date)?;

        let mut conflicts = Vec::new();
        conflicts.extend(self.forbidden.check_day(&facts));
        conflicts.extend(self.checker.check_zodiac_conflicts(
            &facts,
            request.deceased_zodiac,
            &request.family_zodiacs,
        ));

        let level = self.scorer.score(&conflicts, &facts.yi, &facts.ji);
        let rationale = self.scorer.rationale(level).to_string();
        let notes = self.scorer.notes(&conflicts, &facts);

        debug!(
            date = %date,
            level = %level,
            conflicts = conflicts.len(),
            "单日分析完成"
        );

        Ok(DateAnalysis {
            date,
            facts,
            conflicts,
            level,
            rationale,
            notes,
        })
    }

    /// 区间择日
    ///
    /// # 错误
    /// - EngineError::Validation: 起始日晚于结束日
    #[instrument(skip(self, request), fields(
        start = %request.start_date,
        end = %request.end_date,
        deceased = %request.deceased_zodiac
    ))]
    pub fn recommend(&self, request: &AuspiciousDayRequest) -> EngineResult<Vec<DateAnalysis>> {
        validate_request(request)?;
        let results = self.recommend_span(request, request.start_date, request.end_date);
        info!(
            days = request.range_days(),
            recommended = results.len(),
            "区间择日完成"
        );
        Ok(results)
    }

    /// 对 [start, end] 子区间择日（不做请求校验，供分块并行使用）
    pub fn recommend_span(
        &self,
        request: &AuspiciousDayRequest,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DateAnalysis> {
        let mut results: Vec<DateAnalysis> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter_map(|date| match self.analyze_date(date, request) {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!(date = %date, error = %e, "日期换算失败，已跳过");
                    None
                }
            })
            .filter(|a| a.level >= self.min_level)
            .collect();

        results.sort_by_key(|a| a.date);
        results
    }
}
