use chrono::{TimeZone, Utc};
use futdash_core::common::time::FixedClock;
use futdash_core::common::{Commodity, HistoryParams, Interval, Period, Timeframe};
use futdash_core::config::ConfigError;
use futdash_core::dashboard::entity::Notice;
use futdash_core::market::entity::{PricePoint, PriceSeries};
use futdash_core::news::entity::NewsArticle;
use futdash_core::testing::{CountingLoader, StaticMarketProvider, StaticNewsProvider};
use futdash_dashboard::fetch;
use futdash_dashboard::service::DashboardService;
use futdash_summary::cell::SummarizerCell;
use std::sync::Arc;

fn series(closes: &[(i64, f64)]) -> PriceSeries {
    PriceSeries::new(
        closes
            .iter()
            .map(|&(ts, close)| PricePoint {
                time: Utc.timestamp_opt(ts, 0).unwrap(),
                close,
            })
            .collect(),
    )
}

fn headlines(n: usize) -> Vec<NewsArticle> {
    (0..n)
        .map(|i| NewsArticle {
            title: Some(format!("Headline {}", i)),
            url: Some(format!("https://news.example/{}", i)),
            source: Some("Wire".to_string()),
            published_at: Some("2026-03-01T08:00:00Z".to_string()),
            description: Some(format!("Body {}.", i)),
        })
        .collect()
}

fn month_params() -> HistoryParams {
    HistoryParams {
        period: Period::Month1,
        interval: Interval::Day1,
    }
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap()))
}

/// # Summary
/// 场景 1：Gold + 1 Month。
///
/// # Logic
/// 1. 预置最新价与月线序列。
/// 2. 刷新后断言行情源分别以 (GC=F, 1d/1d) 与 (GC=F, 1mo/1d) 被调用。
/// 3. 断言快照各区块完整且无降级提示。
#[tokio::test]
async fn test_gold_one_month_end_to_end() {
    let market = Arc::new(
        StaticMarketProvider::new()
            .with_series(HistoryParams::LATEST_PRICE, series(&[(1772445600, 2051.5)]))
            .with_series(
                month_params(),
                series(&[(1772359200, 2040.0), (1772186400, 2010.0), (1772445600, 2051.5)]),
            ),
    );
    let news = Arc::new(StaticNewsProvider::new(headlines(3)));
    let loader = Arc::new(CountingLoader::new());
    let cell = Arc::new(SummarizerCell::new(loader.clone()));

    let service = DashboardService::new(market.clone(), news.clone(), Some(cell), clock(), 3000);
    let dashboard = service.refresh_labels("Gold", "1 Month").await.unwrap();

    let calls = market.calls().await;
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(ticker, _)| ticker == "GC=F"));
    assert!(calls.iter().any(|(_, p)| *p == HistoryParams::LATEST_PRICE));
    assert!(calls.iter().any(|(_, p)| *p == month_params()));

    assert_eq!(news.queries().await, vec!["Gold".to_string()]);

    assert_eq!(dashboard.commodity, Commodity::Gold);
    assert_eq!(dashboard.timeframe, Timeframe::OneMonth);
    assert_eq!(dashboard.ticker, "GC=F");
    assert_eq!(dashboard.latest_price, Some(2051.5));
    assert_eq!(dashboard.series.len(), 3);
    assert!(dashboard.series.points().windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(dashboard.news.len(), 3);
    assert!(dashboard.summary.is_some());
    assert!(dashboard.notices.is_empty());
    assert_eq!(dashboard.generated_at, Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap());

    let inputs = loader.summarizer().inputs().await;
    assert_eq!(inputs, vec!["Headline 0. Body 0. Headline 1. Body 1. Headline 2. Body 2.".to_string()]);
}

/// 场景 2：新闻源返回 500，页面显示无新闻，且不触发摘要。
#[tokio::test]
async fn test_news_http_500_yields_empty_news() {
    let market = Arc::new(StaticMarketProvider::new());
    let news = Arc::new(StaticNewsProvider::failing_with(500));
    let loader = Arc::new(CountingLoader::new());
    let cell = Arc::new(SummarizerCell::new(loader.clone()));

    let service = DashboardService::new(market, news, Some(cell), clock(), 3000);
    let dashboard = service.refresh(Commodity::Oil, Timeframe::OneDay).await;

    assert!(dashboard.news.is_empty());
    assert!(dashboard.has_notice(Notice::NoNews));
    assert!(dashboard.has_notice(Notice::SummaryUnavailable));
    assert_eq!(loader.load_count(), 0, "no news text means no model load");
}

/// 场景 3：历史序列为空，返回空序列而非错误。
#[tokio::test]
async fn test_empty_history_is_flagged() {
    let market = Arc::new(
        StaticMarketProvider::new()
            .with_series(HistoryParams::LATEST_PRICE, series(&[(1772445600, 71.2)])),
    );
    let news = Arc::new(StaticNewsProvider::new(headlines(1)));
    let service = DashboardService::new(market, news, None, clock(), 3000);

    let dashboard = service.refresh(Commodity::Wheat, Timeframe::OneWeek).await;
    assert_eq!(dashboard.series.len(), 0);
    assert!(dashboard.has_notice(Notice::NoHistory));
    assert_eq!(dashboard.latest_price, Some(71.2));
    assert!(!dashboard.has_notice(Notice::PriceUnavailable));
}

#[tokio::test]
async fn test_market_outage_is_absorbed() {
    let market = Arc::new(StaticMarketProvider::failing());
    let news = Arc::new(StaticNewsProvider::new(Vec::new()));
    let service = DashboardService::new(market, news, None, clock(), 3000);

    let dashboard = service.refresh(Commodity::Copper, Timeframe::OneDay).await;
    assert!(dashboard.latest_price.is_none());
    assert!(dashboard.series.is_empty());
    assert_eq!(
        dashboard.notices,
        vec![
            Notice::PriceUnavailable,
            Notice::NoHistory,
            Notice::NoNews,
            Notice::SummaryUnavailable
        ]
    );
}

#[tokio::test]
async fn test_summarizer_loaded_once_across_refreshes() {
    let market = Arc::new(StaticMarketProvider::new());
    let news = Arc::new(StaticNewsProvider::new(headlines(2)));
    let loader = Arc::new(CountingLoader::new());
    let cell = Arc::new(SummarizerCell::new(loader.clone()));
    let service = DashboardService::new(market, news, Some(cell), clock(), 3000);

    for commodity in Commodity::ALL {
        for timeframe in Timeframe::ALL {
            let dashboard = service.refresh(commodity, timeframe).await;
            assert!(dashboard.summary.is_some());
        }
    }

    assert_eq!(loader.load_count(), 1);
}

#[tokio::test]
async fn test_unknown_commodity_is_rejected_before_fetching() {
    let market = Arc::new(StaticMarketProvider::new());
    let news = Arc::new(StaticNewsProvider::new(Vec::new()));
    let service = DashboardService::new(market.clone(), news, None, clock(), 3000);

    let err = service.refresh_labels("Silver", "1 Day").await.unwrap_err();
    assert!(matches!(err, ConfigError::UnknownCommodity(_)));
    assert!(market.calls().await.is_empty());
}

#[tokio::test]
async fn test_unknown_timeframe_uses_one_day_params() {
    let market = Arc::new(StaticMarketProvider::new());
    let news = Arc::new(StaticNewsProvider::new(Vec::new()));
    let service = DashboardService::new(market.clone(), news, None, clock(), 3000);

    let dashboard = service.refresh_labels("Oil", "1 Decade").await.unwrap();
    assert_eq!(dashboard.timeframe, Timeframe::OneDay);
    assert!(
        market
            .calls()
            .await
            .iter()
            .any(|(t, p)| t == "CL=F" && *p == Timeframe::OneDay.history_params())
    );
}

#[tokio::test]
async fn test_news_fetcher_caps_at_five() {
    let provider = StaticNewsProvider::new(headlines(9));
    let articles = fetch::news(&provider, "Gold").await;
    assert_eq!(articles.len(), 5);
}

#[tokio::test]
async fn test_latest_price_uses_most_recent_point() {
    let provider = StaticMarketProvider::new().with_series(
        HistoryParams::LATEST_PRICE,
        series(&[(200, 10.5), (100, 9.0)]),
    );
    let price = fetch::latest_price(&provider, "NG=F").await.unwrap();
    assert_eq!(price, 10.5);

    let empty = StaticMarketProvider::new();
    assert!(fetch::latest_price(&empty, "NG=F").await.is_err());
}
