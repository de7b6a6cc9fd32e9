use crate::summary::entity::Summary;
use crate::summary::error::SummaryError;
use async_trait::async_trait;
use std::sync::Arc;

/// # Summary
/// 文本摘要模型接口。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync`，加载后在多次渲染间只读共享。
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Summary
    /// 将输入文本压缩为一段摘要。
    ///
    /// # Arguments
    /// * `text` - 已截断到模型输入上限内的原文。
    ///
    /// # Returns
    /// * 成功返回 `Summary`。
    /// * 失败返回 `SummaryError`。
    async fn summarize(&self, text: &str) -> Result<Summary, SummaryError>;
}

/// # Summary
/// 摘要模型加载器，封装昂贵的一次性初始化过程。
///
/// # Invariants
/// - 每进程生命周期内最多成功调用一次，由持有者负责缓存结果。
#[async_trait]
pub trait SummarizerLoader: Send + Sync {
    /// # Summary
    /// 加载模型并返回可共享的摘要器句柄。
    ///
    /// # Returns
    /// 成功返回 `Arc<dyn Summarizer>`，失败返回 `SummaryError::Load`。
    async fn load(&self) -> Result<Arc<dyn Summarizer>, SummaryError>;
}
