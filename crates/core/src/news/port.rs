use crate::news::entity::NewsArticle;
use crate::news::error::NewsError;
use async_trait::async_trait;

/// 单次检索最多返回的新闻条数
pub const MAX_ARTICLES: usize = 5;

/// # Summary
/// 新闻源接口定义。
///
/// # Invariants
/// - 返回列表长度不超过 `MAX_ARTICLES`。
/// - 按发布时间倒序排列（由上游保证）。
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// # Summary
    /// 按关键字检索最近的新闻。
    ///
    /// # Arguments
    /// * `query` - 检索关键字，通常为品种名称。
    ///
    /// # Returns
    /// * 成功返回至多 5 条新闻。
    /// * 非成功状态码返回 `NewsError::FetchFailed`。
    async fn search(&self, query: &str) -> Result<Vec<NewsArticle>, NewsError>;
}
