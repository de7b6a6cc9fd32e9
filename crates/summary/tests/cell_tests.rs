use futdash_core::summary::port::{Summarizer, SummarizerLoader};
use futdash_core::testing::CountingLoader;
use futdash_summary::cell::SummarizerCell;
use std::sync::Arc;

/// # Summary
/// 缓存句柄在多次获取间只加载一次。
///
/// # Logic
/// 1. 使用计数加载器构造 SummarizerCell。
/// 2. 连续获取 10 次并各调用一次摘要。
/// 3. 断言加载器只被调用 1 次。
#[tokio::test]
async fn test_model_loaded_once_across_renders() {
    let loader = Arc::new(CountingLoader::new());
    let cell = SummarizerCell::new(loader.clone());
    assert!(!cell.is_loaded());

    for i in 0..10 {
        let summarizer = cell.get().await.unwrap();
        summarizer.summarize(&format!("render {}", i)).await.unwrap();
    }

    assert!(cell.is_loaded());
    assert_eq!(loader.load_count(), 1);
    assert_eq!(loader.summarizer().inputs().await.len(), 10);
}

#[tokio::test]
async fn test_concurrent_first_access_loads_once() {
    let loader = Arc::new(CountingLoader::new());
    let cell = Arc::new(SummarizerCell::new(loader.clone()));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let cell = cell.clone();
        handles.push(tokio::spawn(async move { cell.get().await.is_ok() }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    assert_eq!(loader.load_count(), 1);
}

#[tokio::test]
async fn test_failed_load_is_not_cached() {
    let loader = Arc::new(CountingLoader::failing_first(1));
    let cell = SummarizerCell::new(loader.clone());

    assert!(cell.get().await.is_err());
    assert!(!cell.is_loaded());

    assert!(cell.get().await.is_ok());
    assert!(cell.get().await.is_ok());
    assert_eq!(loader.load_count(), 2);
}

#[tokio::test]
async fn test_loader_trait_object_is_usable() {
    let loader: Arc<dyn SummarizerLoader> = Arc::new(CountingLoader::new());
    let cell = SummarizerCell::new(loader);
    let summary = cell.get().await.unwrap().summarize("Gold rose.").await.unwrap();
    assert!(summary.text.contains("Gold rose."));
}
