// ==========================================
// 喪葬擇日引擎 - 择日 API
// ==========================================
// 职责: 吉日推荐、祭日计算、单日黄历查询
// 并发: 区间按 parallel_chunk_days 分块，在 blocking 线程池并行计算后合并
// ==========================================

use chrono::{Duration, NaiveDate, Utc};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::RequestValidator;
use crate::config::AlmanacConfigReader;
use crate::domain::analysis::{AuspiciousDayRequest, AuspiciousDayResponse, DateAnalysis};
use crate::domain::day_facts::DayFacts;
use crate::domain::ritual::RitualDateSet;
use crate::domain::types::RecommendationLevel;
use crate::engine::{DateRangeRecommender, LunarDateAdapter, RitualDateCalculator};

/// 总体建议
pub fn overall_advice(dates: &[DateAnalysis]) -> String {
    if dates.is_empty() {
        return "在查詢日期範圍內未找到適合的日期，建議擴大查詢範圍或調整條件".to_string();
    }

    let best = dates
        .iter()
        .filter(|d| d.level == RecommendationLevel::Excellent)
        .count();
    if best > 0 {
        format!("找到{}個極佳日期，建議優先考慮這些日期", best)
    } else {
        format!("找到{}個適宜日期，請參考具體建議選擇", dates.len())
    }
}

/// 将闭区间 [start, end] 切成不超过 chunk_days 天的子区间
///
/// chunk_days 小于 1 或超出 chrono 可表示的天数时返回 ValidationError
fn split_range(
    start: NaiveDate,
    end: NaiveDate,
    chunk_days: i64,
) -> ApiResult<Vec<(NaiveDate, NaiveDate)>> {
    let step = Some(chunk_days)
        .filter(|days| *days >= 1)
        .and_then(Duration::try_days)
        .ok_or_else(|| ApiError::ValidationError(format!("并行分块天数无效: {}", chunk_days)))?;
    let mut spans = Vec::new();
    let mut chunk_start = start;
    while chunk_start <= end {
        let chunk_end = chunk_start
            .checked_add_signed(step - Duration::days(1))
            .map_or(end, |d| d.min(end));
        spans.push((chunk_start, chunk_end));
        match chunk_end.succ_opt() {
            Some(next) => chunk_start = next,
            None => break,
        }
    }
    Ok(spans)
}

// ==========================================
// AlmanacApi - 择日 API
// ==========================================
pub struct AlmanacApi<C>
where
    C: AlmanacConfigReader,
{
    config: Arc<C>,
    adapter: Arc<LunarDateAdapter>,
    rituals: RitualDateCalculator,
}

impl<C> AlmanacApi<C>
where
    C: AlmanacConfigReader,
{
    /// 创建 API 实例（内置 tyme4rs 历法）
    pub fn new(config: Arc<C>) -> Self {
        Self::with_adapter(config, Arc::new(LunarDateAdapter::default()))
    }

    /// 使用指定的农历适配器
    pub fn with_adapter(config: Arc<C>, adapter: Arc<LunarDateAdapter>) -> Self {
        Self {
            config,
            rituals: RitualDateCalculator::new(adapter.clone()),
            adapter,
        }
    }

    /// 推荐吉日
    ///
    /// # 返回
    /// - Ok(AuspiciousDayResponse): 推荐结果（无合适日期时列表为空）
    /// - Err(ApiError::ValidationError): 起始日晚于结束日，或区间超过上限
    #[instrument(skip(self, request), fields(
        start = %request.start_date,
        end = %request.end_date,
        family = request.family_zodiacs.len()
    ))]
    pub async fn recommend_dates(
        &self,
        request: AuspiciousDayRequest,
    ) -> ApiResult<AuspiciousDayResponse> {
        let max_range_days = self.config.get_max_range_days().await?;
        RequestValidator::new(max_range_days).validate(&request)?;

        let chunk_days = self.config.get_parallel_chunk_days().await?;
        let min_level = self.config.get_min_level().await?;
        let query_id = Uuid::new_v4().to_string();

        let recommender =
            Arc::new(DateRangeRecommender::new(self.adapter.clone()).with_min_level(min_level));
        let shared_request = Arc::new(request.clone());

        let tasks = split_range(request.start_date, request.end_date, chunk_days)?
            .into_iter()
            .map(|(start, end)| {
                let recommender = recommender.clone();
                let request = shared_request.clone();
                tokio::task::spawn_blocking(move || recommender.recommend_span(&request, start, end))
            });

        let mut recommended_dates: Vec<DateAnalysis> = try_join_all(tasks)
            .await
            .map_err(|e| ApiError::InternalError(format!("并行择日任务失败: {}", e)))?
            .into_iter()
            .flatten()
            .collect();
        recommended_dates.sort_by_key(|a| a.date);

        info!(
            query_id = %query_id,
            days = request.range_days(),
            recommended = recommended_dates.len(),
            "吉日推荐完成"
        );

        Ok(AuspiciousDayResponse {
            query_id,
            overall_advice: overall_advice(&recommended_dates),
            query_criteria: request,
            recommended_dates,
            queried_at: Utc::now(),
        })
    }

    /// 计算祭日
    pub async fn ritual_dates(
        &self,
        death_date: NaiveDate,
        traditional_mode: bool,
    ) -> ApiResult<RitualDateSet> {
        Ok(self
            .rituals
            .compute_ritual_dates(death_date, traditional_mode)?)
    }

    /// 计算祭日（做七模式取配置默认值）
    pub async fn ritual_dates_default(&self, death_date: NaiveDate) -> ApiResult<RitualDateSet> {
        let traditional_mode = self.config.get_traditional_mode_default().await?;
        self.ritual_dates(death_date, traditional_mode).await
    }

    /// 单日黄历
    pub async fn lunar_info(&self, date: NaiveDate) -> ApiResult<DayFacts> {
        Ok(self.adapter.resolve(date)?)
    }
}
