use async_trait::async_trait;
use futdash_core::config::NewsConfig;
use futdash_core::news::entity::NewsArticle;
use futdash_core::news::error::NewsError;
use futdash_core::news::port::{MAX_ARTICLES, NewsProvider};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// # Summary
/// NewsAPI.org `/v2/everything` 检索实现。
///
/// # Invariants
/// - `api_key` 来自配置注入，不在源码中出现。
/// - 返回条数不超过 `min(page_size, MAX_ARTICLES)`。
pub struct NewsApiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: usize,
}

impl NewsApiProvider {
    /// # Summary
    /// 创建新的 NewsApiProvider。
    ///
    /// # Logic
    /// 1. 按配置设置超时与 User-Agent (NewsAPI 拒绝无 UA 的请求)。
    /// 2. 将 page_size 钳制到 1..=MAX_ARTICLES。
    ///
    /// # Arguments
    /// * `config` - 新闻源配置，调用前应已通过 `AppConfig::validate`。
    ///
    /// # Returns
    /// * 成功返回实例，客户端构建失败返回 `NewsError::Network`。
    pub fn new(config: &NewsConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("futdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size.clamp(1, MAX_ARTICLES),
        })
    }
}

/// NewsAPI 响应体
#[derive(Deserialize, Debug)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    title: Option<String>,
    url: Option<String>,
    source: Option<RawSource>,
    published_at: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawSource {
    name: Option<String>,
}

impl From<RawArticle> for NewsArticle {
    fn from(raw: RawArticle) -> Self {
        NewsArticle {
            title: raw.title,
            url: raw.url,
            source: raw.source.and_then(|s| s.name),
            published_at: raw.published_at,
            description: raw.description,
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    /// # Summary
    /// 检索与关键字相关的最新英文新闻。
    ///
    /// # Logic
    /// 1. 以 `q`, `language=en`, `sortBy=publishedAt`, `pageSize`, `apiKey` 发起 GET。
    /// 2. 非 200 状态码返回 `NewsError::FetchFailed`。
    /// 3. 解析 `articles` 并截断到上限。
    ///
    /// # Arguments
    /// * `query` - 检索关键字。
    ///
    /// # Returns
    /// * 成功返回新闻列表。
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>, NewsError> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = self.page_size.to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::Network(e.to_string()))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(NewsError::FetchFailed {
                status: status.as_u16(),
            });
        }

        let body: EverythingResponse = resp
            .json()
            .await
            .map_err(|e| NewsError::Parse(e.to_string()))?;

        debug!(query, received = body.articles.len(), "newsapi response parsed");

        Ok(body
            .articles
            .into_iter()
            .take(self.page_size)
            .map(NewsArticle::from)
            .collect())
    }
}
