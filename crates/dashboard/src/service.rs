use crate::digest::build_summary_input;
use crate::fetch;
use futdash_core::common::time::Clock;
use futdash_core::common::{Commodity, Timeframe};
use futdash_core::config::ConfigError;
use futdash_core::dashboard::entity::{Dashboard, Notice};
use futdash_core::market::port::MarketDataProvider;
use futdash_core::news::entity::NewsArticle;
use futdash_core::news::port::NewsProvider;
use futdash_core::summary::entity::Summary;
use futdash_summary::cell::SummarizerCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// # Summary
/// 看板刷新服务 (Facade)，串联抓取、摘要与快照组装。
///
/// # Invariants
/// - 不持有任何跨请求的可变状态，唯一共享的是只读的摘要模型句柄。
/// - `refresh` 在所有步骤完成或显式失败后才返回，页面据此一次性渲染。
pub struct DashboardService {
    // 行情源
    market: Arc<dyn MarketDataProvider>,
    // 新闻源
    news: Arc<dyn NewsProvider>,
    // 摘要模型句柄，None 表示摘要功能已关闭
    summarizer: Option<Arc<SummarizerCell>>,
    // 时钟
    clock: Arc<dyn Clock>,
    // 摘要输入上限
    max_input_chars: usize,
}

impl DashboardService {
    /// # Summary
    /// 构造刷新服务。
    ///
    /// # Arguments
    /// * `market`: 行情源。
    /// * `news`: 新闻源。
    /// * `summarizer`: 摘要模型句柄，传 None 关闭摘要。
    /// * `clock`: 时钟。
    /// * `max_input_chars`: 摘要输入上限。
    ///
    /// # Returns
    /// 服务的共享指针。
    pub fn new(
        market: Arc<dyn MarketDataProvider>,
        news: Arc<dyn NewsProvider>,
        summarizer: Option<Arc<SummarizerCell>>,
        clock: Arc<dyn Clock>,
        max_input_chars: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            market,
            news,
            summarizer,
            clock,
            max_input_chars,
        })
    }

    /// # Summary
    /// 按用户选择的标签刷新。
    ///
    /// # Logic
    /// 1. 品种标签经 Ticker 解析器校验，未知品种直接返回配置错误。
    /// 2. 时间范围标签未知时回退为 1 Day。
    /// 3. 委托给 `refresh`。
    ///
    /// # Arguments
    /// * `commodity`: 品种标签。
    /// * `timeframe`: 时间范围标签。
    ///
    /// # Returns
    /// 成功返回快照，品种未知返回 `ConfigError::UnknownCommodity`。
    pub async fn refresh_labels(
        &self,
        commodity: &str,
        timeframe: &str,
    ) -> Result<Dashboard, ConfigError> {
        let commodity: Commodity = commodity.parse()?;
        Ok(self.refresh(commodity, Timeframe::from_label(timeframe)).await)
    }

    /// # Summary
    /// 执行一次完整的刷新流水线。
    ///
    /// # Logic
    /// 1. 解析 ticker。
    /// 2. 并发抓取最新价、历史序列与新闻。
    /// 3. 以新闻原文生成摘要。
    /// 4. 汇总降级提示并组装快照。
    ///
    /// # Arguments
    /// * `commodity`: 品种。
    /// * `timeframe`: 时间范围。
    ///
    /// # Returns
    /// 本次刷新的 Dashboard 快照，从不失败。
    pub async fn refresh(&self, commodity: Commodity, timeframe: Timeframe) -> Dashboard {
        let ticker = commodity.ticker();
        info!(%commodity, %timeframe, ticker, "refreshing dashboard");

        let (price, series, news) = tokio::join!(
            fetch::latest_price(self.market.as_ref(), ticker),
            fetch::history(self.market.as_ref(), ticker, timeframe),
            fetch::news(self.news.as_ref(), commodity.label()),
        );

        let latest_price = match price {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(ticker, error = %e, "latest price unavailable");
                None
            }
        };

        let summary = self.summarize(&news).await;

        let mut notices = Vec::new();
        if latest_price.is_none() {
            notices.push(Notice::PriceUnavailable);
        }
        if series.is_empty() {
            notices.push(Notice::NoHistory);
        }
        if news.is_empty() {
            notices.push(Notice::NoNews);
        }
        if summary.is_none() {
            notices.push(Notice::SummaryUnavailable);
        }

        debug!(
            ticker,
            points = series.len(),
            articles = news.len(),
            notices = notices.len(),
            "dashboard assembled"
        );

        Dashboard {
            commodity,
            timeframe,
            ticker: ticker.to_string(),
            generated_at: self.clock.now(),
            latest_price,
            series,
            news,
            summary,
            notices,
        }
    }

    /// # Summary
    /// 生成新闻摘要。
    ///
    /// # Logic
    /// 1. 摘要关闭或原文为空时不触发模型加载。
    /// 2. 通过缓存句柄获取模型，加载或推理失败均降级为 None。
    async fn summarize(&self, news: &[NewsArticle]) -> Option<Summary> {
        let cell = self.summarizer.as_ref()?;

        let input = build_summary_input(news, self.max_input_chars);
        if input.is_empty() {
            debug!("no news text to summarize");
            return None;
        }

        let summarizer = match cell.get().await {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "summarizer unavailable");
                return None;
            }
        };

        match summarizer.summarize(&input).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, "summarization failed");
                None
            }
        }
    }
}
