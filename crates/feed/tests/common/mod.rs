use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// 本地桩服务记录的请求：(路径参数, 查询参数)
pub type Recorded = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

/// 在随机端口启动桩服务，返回根地址
pub async fn spawn_stub(router: Router) -> String {
    futdash_core::common::tls::install_crypto_provider();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
