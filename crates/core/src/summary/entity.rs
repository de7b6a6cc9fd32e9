use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Summary
/// 模型生成的新闻摘要。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Summary {
    /// 摘要正文
    pub text: String,
    /// 生成该摘要的模型名称
    pub model: String,
}
