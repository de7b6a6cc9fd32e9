mod settings;

use std::sync::Arc;

use futdash_api::server::{AppState, start_server};
use futdash_core::common::time::SystemClock;
use futdash_core::common::tls::install_crypto_provider;
use futdash_dashboard::service::DashboardService;
use futdash_feed::newsapi::NewsApiProvider;
use futdash_feed::yahoo::YahooProvider;
use futdash_summary::cell::SummarizerCell;
use futdash_summary::huggingface::HuggingFaceLoader;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 DashboardService。
///
/// # Logic
/// 1. 读取 `.env` 并装载、校验配置，缺少凭据直接退出。
/// 2. 初始化全局日志。
/// 3. 安装 TLS 加密后端。
/// 4. 实例化基础设施层（行情源、新闻源、摘要模型加载器）。
/// 5. 预热摘要模型，失败不影响启动。
/// 6. 构造应用服务层并启动 HTTP 服务，直到收到退出信号。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置
    // .env 可选
    dotenvy::dotenv().ok();
    let app_config = settings::load()?;
    app_config.validate()?;

    // 2. 日志，guard 必须存活到 main 结束以冲刷缓冲
    let (writer, _log_guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(true))
        .init();
    info!("Futures dashboard starting...");
    info!(?app_config, "configuration loaded");

    // 3. TLS
    install_crypto_provider();

    // 4. 基础设施层
    let market = Arc::new(YahooProvider::new(&app_config.market)?);
    let news = Arc::new(NewsApiProvider::new(&app_config.news)?);

    let summarizer = if app_config.summary.enabled {
        let loader = Arc::new(HuggingFaceLoader::new(app_config.summary.clone()));
        let cell = Arc::new(SummarizerCell::new(loader));

        // 5. 预热
        match cell.get().await {
            Ok(_) => info!(model = %app_config.summary.model, "summarizer ready"),
            Err(e) => warn!(error = %e, "summarizer warm-up failed, will retry on first render"),
        }
        Some(cell)
    } else {
        info!("summarizer disabled by configuration");
        None
    };

    // 6. 应用服务层
    let dashboard = DashboardService::new(
        market,
        news,
        summarizer,
        Arc::new(SystemClock),
        app_config.summary.max_input_chars,
    );

    let bind_addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    start_server(AppState { dashboard }, &bind_addr).await?;

    info!("Shutdown complete.");
    Ok(())
}
