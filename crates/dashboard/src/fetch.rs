use futdash_core::common::{HistoryParams, Timeframe};
use futdash_core::market::entity::PriceSeries;
use futdash_core::market::error::MarketError;
use futdash_core::market::port::MarketDataProvider;
use futdash_core::news::entity::NewsArticle;
use futdash_core::news::port::{MAX_ARTICLES, NewsProvider};
use tracing::warn;

/// # Summary
/// 最新价抓取。
///
/// # Logic
/// 1. 以 1 日窗口、日线采样请求行情。
/// 2. 取窗口内时间最新的收盘价 (日线下窗口只有一行)。
/// 3. 空序列返回 `MarketError::DataUnavailable`。
///
/// # Arguments
/// * `provider`: 行情源。
/// * `ticker`: 合约代码。
///
/// # Returns
/// 成功返回收盘价，失败返回 MarketError。
pub async fn latest_price(
    provider: &dyn MarketDataProvider,
    ticker: &str,
) -> Result<f64, MarketError> {
    let series = provider
        .fetch_series(ticker, HistoryParams::LATEST_PRICE)
        .await?;

    series
        .last()
        .map(|p| p.close)
        .ok_or_else(|| MarketError::DataUnavailable(ticker.to_string()))
}

/// # Summary
/// 历史序列抓取，永不失败。
///
/// # Logic
/// 1. 由 Timeframe 映射出回溯区间与采样间隔。
/// 2. 上游错误记录 warn 日志后降级为空序列。
///
/// # Arguments
/// * `provider`: 行情源。
/// * `ticker`: 合约代码。
/// * `timeframe`: 时间范围。
///
/// # Returns
/// 时间升序的序列，可能为空。
pub async fn history(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    timeframe: Timeframe,
) -> PriceSeries {
    match provider.fetch_series(ticker, timeframe.history_params()).await {
        Ok(series) => series,
        Err(e) => {
            warn!(ticker, %timeframe, error = %e, "history fetch failed, rendering empty chart");
            PriceSeries::empty()
        }
    }
}

/// # Summary
/// 新闻抓取，永不失败。
///
/// # Logic
/// 1. 以品种名称检索新闻。
/// 2. 任何 NewsError (含非 200 状态) 降级为空列表。
/// 3. 结果截断到 `MAX_ARTICLES`。
///
/// # Arguments
/// * `provider`: 新闻源。
/// * `query`: 检索关键字。
///
/// # Returns
/// 至多 5 条新闻。
pub async fn news(provider: &dyn NewsProvider, query: &str) -> Vec<NewsArticle> {
    match provider.search(query).await {
        Ok(mut articles) => {
            articles.truncate(MAX_ARTICLES);
            articles
        }
        Err(e) => {
            warn!(query, error = %e, "news fetch failed, rendering no news");
            Vec::new()
        }
    }
}
