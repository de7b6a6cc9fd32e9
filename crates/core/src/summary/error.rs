use thiserror::Error;

/// # Summary
/// 摘要模型错误枚举。
///
/// # Invariants
/// - 流水线将所有变体降级为 "摘要不可用" 提示。
#[derive(Error, Debug)]
pub enum SummaryError {
    /// 模型加载失败
    #[error("Model load error: {0}")]
    Load(String),

    /// 网络连接或传输错误
    #[error("Network error: {0}")]
    Network(String),

    /// 推理服务返回的错误 (如模型仍在加载、额度耗尽)
    #[error("Platform error: {0}")]
    Platform(String),

    /// 响应体无法解析
    #[error("Parse error: {0}")]
    Parse(String),

    /// 待摘要文本为空
    #[error("Nothing to summarize")]
    EmptyInput,
}
