//! # 测试工具
//!
//! 各端口的内存实现，用于在不访问网络的情况下驱动流水线。
//! 仅在 `test-utils` feature 下编译。

use crate::common::HistoryParams;
use crate::market::entity::PriceSeries;
use crate::market::error::MarketError;
use crate::market::port::MarketDataProvider;
use crate::news::entity::NewsArticle;
use crate::news::error::NewsError;
use crate::news::port::NewsProvider;
use crate::summary::entity::Summary;
use crate::summary::error::SummaryError;
use crate::summary::port::{Summarizer, SummarizerLoader};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// 行情源调用记录：(ticker, 参数)
pub type MarketCall = (String, HistoryParams);

/// # Summary
/// 按请求参数返回预置序列的行情源。
///
/// # Invariants
/// - 未预置的参数返回空序列。
/// - `failing` 为真时所有请求返回网络错误。
#[derive(Default)]
pub struct StaticMarketProvider {
    series: HashMap<HistoryParams, PriceSeries>,
    failing: bool,
    calls: Mutex<Vec<MarketCall>>,
}

impl StaticMarketProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有请求均失败的行情源
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// 为某组参数预置返回序列
    pub fn with_series(mut self, params: HistoryParams, series: PriceSeries) -> Self {
        self.series.insert(params, series);
        self
    }

    /// 已发生的调用记录
    pub async fn calls(&self) -> Vec<MarketCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketProvider {
    async fn fetch_series(
        &self,
        ticker: &str,
        params: HistoryParams,
    ) -> Result<PriceSeries, MarketError> {
        self.calls.lock().await.push((ticker.to_string(), params));
        if self.failing {
            return Err(MarketError::Network("simulated outage".to_string()));
        }
        Ok(self.series.get(&params).cloned().unwrap_or_default())
    }
}

/// # Summary
/// 返回固定新闻或固定错误状态码的新闻源。
pub struct StaticNewsProvider {
    articles: Vec<NewsArticle>,
    fail_status: Option<u16>,
    queries: Mutex<Vec<String>>,
}

impl StaticNewsProvider {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles,
            fail_status: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// 模拟上游返回非成功状态码
    pub fn failing_with(status: u16) -> Self {
        Self {
            articles: Vec::new(),
            fail_status: Some(status),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl NewsProvider for StaticNewsProvider {
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>, NewsError> {
        self.queries.lock().await.push(query.to_string());
        match self.fail_status {
            Some(status) => Err(NewsError::FetchFailed { status }),
            None => Ok(self.articles.clone()),
        }
    }
}

/// # Summary
/// 回显输入前缀的摘要器，并记录收到的原文。
#[derive(Default)]
pub struct EchoSummarizer {
    inputs: Mutex<Vec<String>>,
}

impl EchoSummarizer {
    pub async fn inputs(&self) -> Vec<String> {
        self.inputs.lock().await.clone()
    }
}

#[async_trait]
impl Summarizer for EchoSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary, SummaryError> {
        self.inputs.lock().await.push(text.to_string());
        let head: String = text.chars().take(80).collect();
        Ok(Summary {
            text: format!("Summary: {}", head),
            model: "echo".to_string(),
        })
    }
}

/// # Summary
/// 统计加载次数的加载器，可配置为前若干次加载失败。
pub struct CountingLoader {
    summarizer: Arc<EchoSummarizer>,
    loads: AtomicUsize,
    failures_before_success: usize,
}

impl CountingLoader {
    pub fn new() -> Self {
        Self::failing_first(0)
    }

    /// 前 `n` 次加载返回 `SummaryError::Load`
    pub fn failing_first(n: usize) -> Self {
        Self {
            summarizer: Arc::new(EchoSummarizer::default()),
            loads: AtomicUsize::new(0),
            failures_before_success: n,
        }
    }

    /// 加载被调用的次数 (含失败)
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// 加载产出的摘要器，用于断言其收到的输入
    pub fn summarizer(&self) -> Arc<EchoSummarizer> {
        self.summarizer.clone()
    }
}

impl Default for CountingLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummarizerLoader for CountingLoader {
    async fn load(&self) -> Result<Arc<dyn Summarizer>, SummaryError> {
        let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures_before_success {
            return Err(SummaryError::Load(format!("simulated load failure #{}", attempt + 1)));
        }
        Ok(self.summarizer.clone())
    }
}
