use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Summary
/// 单条新闻条目，全部字段来自上游，允许缺失。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsArticle {
    /// 标题
    pub title: Option<String>,
    /// 原文链接
    pub url: Option<String>,
    /// 来源媒体名称
    pub source: Option<String>,
    /// 发布时间 (上游原样保留的 ISO 8601 字符串)
    pub published_at: Option<String>,
    /// 摘要描述
    pub description: Option<String>,
}

impl NewsArticle {
    /// 发布日期部分 (`YYYY-MM-DD`)，即时间串的前 10 个字符。
    pub fn published_date(&self) -> Option<&str> {
        let raw = self.published_at.as_deref()?;
        Some(raw.get(..10).unwrap_or(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_date_truncates_timestamp() {
        let article = NewsArticle {
            published_at: Some("2026-03-01T08:15:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(article.published_date(), Some("2026-03-01"));

        let short = NewsArticle {
            published_at: Some("2026".to_string()),
            ..Default::default()
        };
        assert_eq!(short.published_date(), Some("2026"));
        assert_eq!(NewsArticle::default().published_date(), None);
    }
}
