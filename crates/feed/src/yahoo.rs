use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futdash_core::common::{HistoryParams, Interval, Period};
use futdash_core::config::MarketConfig;
use futdash_core::market::entity::{PricePoint, PriceSeries};
use futdash_core::market::error::MarketError;
use futdash_core::market::port::MarketDataProvider;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// # Summary
/// Yahoo Finance 行情提供者实现，基于 v8 chart 接口。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯。
/// - `base_url` 不带结尾斜杠。
#[derive(Clone)]
pub struct YahooProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
    /// 接口根地址，测试时可指向本地服务
    base_url: String,
}

impl YahooProvider {
    /// # Summary
    /// 创建一个新的 YahooProvider 实例。
    ///
    /// # Logic
    /// 1. 按配置设置超时。
    /// 2. 设置伪装浏览器 Header (User-Agent) 以减少被拦截风险。
    /// 3. 初始化 reqwest 客户端。
    ///
    /// # Arguments
    /// * `config`: 行情源配置。
    ///
    /// # Returns
    /// 成功返回 YahooProvider，客户端构建失败返回 `MarketError::Network`。
    pub fn new(config: &MarketConfig) -> Result<Self, MarketError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(BROWSER_USER_AGENT),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| MarketError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// 映射回溯区间为 Yahoo 识别的 range
fn yahoo_range(period: Period) -> &'static str {
    match period {
        Period::Day1 => "1d",
        Period::Day5 => "5d",
        Period::Month1 => "1mo",
    }
}

/// 映射采样间隔为 Yahoo 识别的 interval
fn yahoo_interval(interval: Interval) -> &'static str {
    match interval {
        Interval::Minute5 => "5m",
        Interval::Hour1 => "60m",
        Interval::Day1 => "1d",
    }
}

/// # Summary
/// Yahoo API 响应顶层结构。
///
/// # Invariants
/// - 映射自 Yahoo v8 chart 接口。
#[derive(Deserialize, Debug)]
struct YahooResponse {
    chart: YahooChart,
}

/// # Summary
/// Yahoo API 图表数据部分。
#[derive(Deserialize, Debug)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

/// # Summary
/// Yahoo API 错误详情。
#[derive(Deserialize, Debug)]
struct YahooError {
    description: String,
}

/// # Summary
/// Yahoo API 单个时间序列结果。
///
/// # Invariants
/// - 无成交数据时 `timestamp` 字段整体缺失。
#[derive(Deserialize, Debug)]
struct YahooResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: YahooIndicators,
}

/// # Summary
/// Yahoo API 指标容器。
#[derive(Deserialize, Debug, Default)]
struct YahooIndicators {
    #[serde(default)]
    quote: Vec<YahooQuote>,
}

/// # Summary
/// Yahoo API 原始报价数据，只取收盘价。
#[derive(Deserialize, Debug)]
struct YahooQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// # Summary
/// 将 chart 响应转换为价格序列。
///
/// # Logic
/// 1. 上游 error 字段非空时返回 `MarketError::Unknown`。
/// 2. result 缺失或为空视为无数据。
/// 3. 按下标对齐 timestamp 与 close，丢弃收盘价缺失或时间戳非法的行。
///
/// # Arguments
/// * `response`: 反序列化后的响应体。
///
/// # Returns
/// 时间有序的 PriceSeries。
fn into_series(response: YahooResponse) -> Result<PriceSeries, MarketError> {
    if let Some(err) = response.chart.error {
        return Err(MarketError::Unknown(err.description));
    }

    let Some(result) = response.chart.result.and_then(|mut r| r.pop()) else {
        return Ok(PriceSeries::empty());
    };

    let Some(quote) = result.indicators.quote.first() else {
        return Ok(PriceSeries::empty());
    };

    let points = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let close = quote.close.get(i).copied().flatten()?;
            let time = Utc.timestamp_opt(ts, 0).single()?;
            Some(PricePoint { time, close })
        })
        .collect();

    Ok(PriceSeries::new(points))
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    /// # Summary
    /// 从 Yahoo Finance 抓取收盘价序列。
    ///
    /// # Logic
    /// 1. 映射 HistoryParams 为 range 与 interval。
    /// 2. 发起异步请求，404 (合约无数据) 视为空序列。
    /// 3. 解析嵌套的 JSON 数据并提取收盘价。
    ///
    /// # Arguments
    /// * `ticker`: 合约代码。
    /// * `params`: 回溯区间与采样间隔。
    ///
    /// # Returns
    /// 成功返回 PriceSeries，失败返回 MarketError。
    async fn fetch_series(
        &self,
        ticker: &str,
        params: HistoryParams,
    ) -> Result<PriceSeries, MarketError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let range = yahoo_range(params.period);
        let interval = yahoo_interval(params.interval);

        debug!(ticker, range, interval, "requesting yahoo chart");

        let resp = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(ticker, "yahoo reports no data");
            return Ok(PriceSeries::empty());
        }

        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        let json: YahooResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        into_series(json)
    }
}
