use thiserror::Error;

/// # Summary
/// 新闻源错误枚举。
///
/// # Invariants
/// - 流水线将所有变体降级为空列表，页面无法区分 "抓取失败" 与 "确实无新闻"。
#[derive(Error, Debug)]
pub enum NewsError {
    /// 网络连接或传输错误
    #[error("Network error: {0}")]
    Network(String),

    /// 新闻源返回非成功状态码
    #[error("News fetch failed with HTTP {status}")]
    FetchFailed { status: u16 },

    /// 响应体无法解析
    #[error("Parse error: {0}")]
    Parse(String),
}
