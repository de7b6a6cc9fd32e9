use async_trait::async_trait;
use futdash_core::config::SummaryConfig;
use futdash_core::summary::entity::Summary;
use futdash_core::summary::error::SummaryError;
use futdash_core::summary::port::{Summarizer, SummarizerLoader};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// # Summary
/// 通过 Hugging Face 推理接口调用摘要模型的实现。
///
/// # Invariants
/// * 构造后只读，可在多次渲染间共享。
/// * `api_token` 为 None 时以匿名身份调用 (受平台限流)。
pub struct HuggingFaceSummarizer {
    /// The HTTP client used for requests.
    client: Client,
    /// 模型推理地址 `{endpoint}/{model}`
    model_url: String,
    /// 模型名称，写入生成的 Summary
    model: String,
    /// Bearer token
    api_token: Option<String>,
    max_length: u32,
    min_length: u32,
}

/// # Summary
/// Payload structure for the summarization task.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

/// 成功响应中的单条生成结果
#[derive(Deserialize, Debug)]
struct SummaryOutput {
    summary_text: String,
}

/// 平台错误响应
#[derive(Deserialize, Debug)]
struct InferenceFailure {
    error: String,
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    /// # Summary
    /// Sends the text to the inference endpoint and returns the generated summary.
    ///
    /// # Logic
    /// 1. 空白输入直接返回 `SummaryError::EmptyInput`，不发起请求。
    /// 2. POST `{inputs, parameters}`，携带可选的 Bearer token。
    /// 3. 非成功状态码解析 `{"error": ...}` 并返回 `SummaryError::Platform`。
    /// 4. 取第一条 `summary_text`。
    ///
    /// # Arguments
    /// * `text` - 已截断的原文。
    ///
    /// # Returns
    /// * `Ok(Summary)` on success.
    /// * `Err(SummaryError)` if a network error occurs or the API returns a non-success status.
    async fn summarize(&self, text: &str) -> Result<Summary, SummaryError> {
        if text.trim().is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        let payload = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_length: self.max_length,
                min_length: self.min_length,
                do_sample: false,
            },
        };

        let mut request = self.client.post(&self.model_url).json(&payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummaryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<InferenceFailure>(&error_text)
                .map(|f| f.error)
                .unwrap_or(error_text);
            return Err(SummaryError::Platform(format!(
                "inference API returned {}: {}",
                status, detail
            )));
        }

        let outputs: Vec<SummaryOutput> = response
            .json()
            .await
            .map_err(|e| SummaryError::Parse(e.to_string()))?;

        let text = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SummaryError::Parse("empty summary output".to_string()))?;

        debug!(model = %self.model, chars = text.len(), "summary generated");

        Ok(Summary {
            text,
            model: self.model.clone(),
        })
    }
}

/// # Summary
/// HuggingFaceSummarizer 的加载器。
///
/// # Invariants
/// * 只持有配置，真正的客户端在 `load` 时构建。
pub struct HuggingFaceLoader {
    config: SummaryConfig,
}

impl HuggingFaceLoader {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SummarizerLoader for HuggingFaceLoader {
    /// # Summary
    /// 构建推理客户端并返回共享句柄。
    ///
    /// # Logic
    /// 1. 按配置超时构建 reqwest 客户端。
    /// 2. 拼接模型推理地址。
    ///
    /// # Returns
    /// * 成功返回 `Arc<dyn Summarizer>`，客户端构建失败返回 `SummaryError::Load`。
    async fn load(&self) -> Result<Arc<dyn Summarizer>, SummaryError> {
        info!(model = %self.config.model, "loading summarization model");

        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| SummaryError::Load(e.to_string()))?;

        let model_url = format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        Ok(Arc::new(HuggingFaceSummarizer {
            client,
            model_url,
            model: self.config.model.clone(),
            api_token: self
                .config
                .api_token
                .clone()
                .filter(|t| !t.trim().is_empty()),
            max_length: self.config.max_length,
            min_length: self.config.min_length,
        }))
    }
}
