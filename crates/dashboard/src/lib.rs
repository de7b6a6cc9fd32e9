//! # `futdash-dashboard` - 刷新流水线
//!
//! resolve → {最新价, 历史序列, 新闻} 并发抓取 → 摘要 → `Dashboard` 快照。
//! 所有上游失败都在抓取边界被吸收为空结果与降级提示。

pub mod digest;
pub mod fetch;
pub mod service;
