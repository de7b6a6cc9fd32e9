use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Summary
/// 单个收盘价采样点。
///
/// # Invariants
/// - `close` 由上游提供，预期非负但不做校验。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricePoint {
    // 采样时间
    pub time: DateTime<Utc>,
    // 收盘价 (USD)
    pub close: f64,
}

/// # Summary
/// 按时间升序排列的收盘价序列，仅在一次渲染内存活。
///
/// # Invariants
/// - 内部点位按 `time` 非递减排列，由构造函数保证。
/// - 允许为空，空序列代表上游无数据。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// # Summary
    /// 从任意顺序的点位构造序列。
    ///
    /// # Logic
    /// 1. 按时间做稳定排序，同一时间戳保持上游原有顺序。
    ///
    /// # Arguments
    /// * `points`: 上游返回的原始点位。
    ///
    /// # Returns
    /// 时间有序的 PriceSeries。
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.time);
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// 时间上最新的点位
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(ts: i64, close: f64) -> PricePoint {
        PricePoint {
            time: Utc.timestamp_opt(ts, 0).unwrap(),
            close,
        }
    }

    #[test]
    fn test_series_is_sorted_on_construction() {
        let series = PriceSeries::new(vec![point(300, 3.0), point(100, 1.0), point(200, 2.0)]);
        let closes: Vec<f64> = series.points().iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
        assert!(series.points().windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(series.last().map(|p| p.close), Some(3.0));
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.last().is_none());
    }
}
