use serde::{Deserialize, Serialize};
use thiserror::Error;

/// # Summary
/// 配置与选择解析错误，属于启动期或请求入口处的致命错误。
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 缺少必须的凭据 (如新闻源 API Key)
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// 品种不在封闭集合内
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),

    /// 配置值不合法
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub market: MarketConfig,
    pub news: NewsConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 行情源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// 新闻源配置。`api_key` 只能来自环境变量或部署配置文件。
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub base_url: String,
    pub api_key: String,
    pub page_size: usize,
    pub timeout_secs: u64,
}

/// 摘要模型配置
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub api_token: Option<String>,
    // 送入模型前的最大字符数
    pub max_input_chars: usize,
    // 生成摘要的 token 长度区间
    pub max_length: u32,
    pub min_length: u32,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org".to_string(),
            api_key: String::new(),
            page_size: 5,
            timeout_secs: 10,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://router.huggingface.co/hf-inference/models".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            api_token: None,
            max_input_chars: 3000,
            max_length: 130,
            min_length: 30,
            timeout_secs: 30,
        }
    }
}

// 凭据不得出现在日志中
impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("enabled", &self.enabled)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_token", &self.api_token.as_deref().map(redact))
            .field("max_input_chars", &self.max_input_chars)
            .field("max_length", &self.max_length)
            .field("min_length", &self.min_length)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}

impl AppConfig {
    /// # Summary
    /// 启动期配置校验。
    ///
    /// # Logic
    /// 1. 新闻源 API Key 不得为空白。
    /// 2. `page_size` 必须落在 1..=5。
    /// 3. 启用摘要时，输入上限与生成长度区间必须合法。
    ///
    /// # Returns
    /// 合法返回 Ok，否则返回首个发现的 `ConfigError`。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.news.api_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("news.api_key"));
        }
        if self.news.page_size == 0 || self.news.page_size > crate::news::port::MAX_ARTICLES {
            return Err(ConfigError::Invalid(format!(
                "news.page_size must be within 1..={}, got {}",
                crate::news::port::MAX_ARTICLES,
                self.news.page_size
            )));
        }
        if self.summary.enabled {
            if self.summary.max_input_chars == 0 {
                return Err(ConfigError::Invalid(
                    "summary.max_input_chars must be positive".to_string(),
                ));
            }
            if self.summary.min_length > self.summary.max_length {
                return Err(ConfigError::Invalid(format!(
                    "summary.min_length ({}) exceeds summary.max_length ({})",
                    self.summary.min_length, self.summary.max_length
                )));
            }
        }
        Ok(())
    }
}
