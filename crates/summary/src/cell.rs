use futdash_core::summary::error::SummaryError;
use futdash_core::summary::port::{Summarizer, SummarizerLoader};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// # Summary
/// 进程级缓存的摘要模型句柄。
///
/// # Invariants
/// - 只有成功的加载会被缓存，此后句柄只读共享，无需析构。
/// - 并发的首次访问只会触发一次加载，其余调用等待同一结果。
/// - 加载失败不缓存，下一次渲染会重新尝试。
pub struct SummarizerCell {
    loader: Arc<dyn SummarizerLoader>,
    handle: OnceCell<Arc<dyn Summarizer>>,
}

impl SummarizerCell {
    pub fn new(loader: Arc<dyn SummarizerLoader>) -> Self {
        Self {
            loader,
            handle: OnceCell::new(),
        }
    }

    /// # Summary
    /// 获取模型句柄，首次调用时加载。
    ///
    /// # Logic
    /// 1. 已初始化则直接返回缓存的句柄。
    /// 2. 否则调用加载器，成功后写入缓存。
    ///
    /// # Returns
    /// 成功返回共享句柄，加载失败返回 `SummaryError`。
    pub async fn get(&self) -> Result<Arc<dyn Summarizer>, SummaryError> {
        self.handle
            .get_or_try_init(|| async {
                let summarizer = self.loader.load().await.inspect_err(|e| {
                    warn!(error = %e, "summarizer load failed");
                })?;
                info!("summarizer cached for process lifetime");
                Ok::<_, SummaryError>(summarizer)
            })
            .await
            .cloned()
    }

    /// 模型是否已加载
    pub fn is_loaded(&self) -> bool {
        self.handle.initialized()
    }
}
