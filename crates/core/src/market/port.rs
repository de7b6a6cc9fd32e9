use crate::common::HistoryParams;
use crate::market::entity::PriceSeries;
use crate::market::error::MarketError;
use async_trait::async_trait;

/// # Summary
/// 市场行情数据提供者接口（原始数据源）。
///
/// # Invariants
/// - 上游无数据时返回空序列而不是错误。
/// - 返回的序列必须按时间升序。
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// # Summary
    /// 获取指定合约在回溯区间内按采样间隔排列的收盘价序列。
    ///
    /// # Logic
    /// 1. 将 `HistoryParams` 映射为数据源识别的参数。
    /// 2. 执行网络请求并解析响应数据。
    /// 3. 丢弃缺失收盘价的行。
    ///
    /// # Arguments
    /// * `ticker`: 合约代码，例如 `GC=F`。
    /// * `params`: 回溯区间与采样间隔。
    ///
    /// # Returns
    /// 成功返回 PriceSeries (可能为空)，失败返回 MarketError。
    async fn fetch_series(
        &self,
        ticker: &str,
        params: HistoryParams,
    ) -> Result<PriceSeries, MarketError>;
}
