// ==========================================
// 喪葬擇日引擎 - 请求校验器
// ==========================================
// 职责: 在任何农历换算之前拒绝格式错误的请求
// 规则: 日期格式 YYYY-MM-DD；生肖属于十二生肖；起始日 <= 结束日；区间不超过上限
// ==========================================

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::analysis::AuspiciousDayRequest;
use crate::domain::types::Zodiac;
use crate::engine::validate_request;

/// 日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析日期字段
pub fn parse_date(field: &str, raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| ApiError::InvalidInput(format!("{}日期格式错误 ({}): {}", field, raw, e)))
}

/// 解析生肖字段（繁简皆可）
pub fn parse_zodiac(field: &str, raw: &str) -> ApiResult<Zodiac> {
    raw.parse::<Zodiac>()
        .map_err(|e| ApiError::ValidationError(format!("{}: {}", field, e)))
}

/// 从 JSON 解析查询条件
///
/// 字段缺失、日期格式错误或生肖不在十二生肖内均视为校验失败
pub fn parse_request_json(json: &str) -> ApiResult<AuspiciousDayRequest> {
    serde_json::from_str(json).map_err(|e| ApiError::ValidationError(e.to_string()))
}

// ==========================================
// RequestValidator - 请求校验器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    max_range_days: i64,
}

impl RequestValidator {
    pub fn new(max_range_days: i64) -> Self {
        Self { max_range_days }
    }

    /// 校验吉日查询条件
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ApiError::ValidationError): 起始日晚于结束日，或区间超过上限
    pub fn validate(&self, request: &AuspiciousDayRequest) -> ApiResult<()> {
        validate_request(request)?;

        let days = request.range_days();
        if days > self.max_range_days {
            return Err(ApiError::ValidationError(format!(
                "查詢區間 {} 天超過上限 {} 天",
                days, self.max_range_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> AuspiciousDayRequest {
        AuspiciousDayRequest {
            deceased_zodiac: Zodiac::Rat,
            death_date: parse_date("歿日", "2025-01-01").unwrap(),
            family_zodiacs: vec![],
            start_date: parse_date("起始", start).unwrap(),
            end_date: parse_date("结束", end).unwrap(),
        }
    }

    #[test]
    fn test_range_cap() {
        let validator = RequestValidator::new(31);
        assert!(validator.validate(&request("2025-03-01", "2025-03-31")).is_ok());
        let err = validator
            .validate(&request("2025-03-01", "2025-04-01"))
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_reversed_range() {
        let validator = RequestValidator::new(366);
        assert!(matches!(
            validator.validate(&request("2025-03-02", "2025-03-01")),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_inputs() {
        assert!(matches!(
            parse_date("歿日", "2025/01/01"),
            Err(ApiError::InvalidInput(_))
        ));
        assert_eq!(parse_zodiac("亡者生肖", "龙").unwrap(), Zodiac::Dragon);
        assert!(matches!(
            parse_zodiac("亡者生肖", "貓"),
            Err(ApiError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_request_json_unknown_zodiac() {
        let json = r#"{
            "deceased_zodiac": "貓",
            "death_date": "2025-01-01",
            "start_date": "2025-03-01",
            "end_date": "2025-03-31"
        }"#;
        assert!(matches!(
            parse_request_json(json),
            Err(ApiError::ValidationError(_))
        ));
    }
}
