mod common;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use common::{Recorded, spawn_stub};
use futdash_core::common::{HistoryParams, Timeframe};
use futdash_core::config::MarketConfig;
use futdash_core::market::error::MarketError;
use futdash_core::market::port::MarketDataProvider;
use futdash_feed::yahoo::YahooProvider;
use serde_json::{Value, json};
use std::collections::HashMap;

fn provider(base_url: String) -> YahooProvider {
    YahooProvider::new(&MarketConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

/// 乱序且含空值的 chart 响应
fn chart_body() -> Value {
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "GC=F", "currency": "USD" },
                "timestamp": [1772445600, 1772359200, 1772532000],
                "indicators": {
                    "quote": [{
                        "open": [1.0, 1.0, 1.0],
                        "close": [2051.5, 2040.25, null]
                    }]
                }
            }],
            "error": null
        }
    })
}

async fn chart_handler(
    State(recorded): State<Recorded>,
    Path(ticker): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    recorded.lock().await.push((ticker, query));
    Json(chart_body())
}

/// # Summary
/// 抓取历史序列的集成测试。
///
/// # Logic
/// 1. 启动返回固定 chart 的本地桩服务。
/// 2. 以 1 Month 参数请求 GC=F。
/// 3. 断言请求参数映射正确、空值被丢弃、结果按时间升序。
#[tokio::test]
async fn test_fetch_series_maps_params_and_sorts() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/v8/finance/chart/{ticker}", get(chart_handler))
        .with_state(recorded.clone());
    let base = spawn_stub(router).await;

    let series = provider(base)
        .fetch_series("GC=F", Timeframe::OneMonth.history_params())
        .await
        .unwrap();

    let calls = recorded.lock().await.clone();
    assert_eq!(calls.len(), 1);
    let (ticker, query) = &calls[0];
    assert_eq!(ticker, "GC=F");
    assert_eq!(query.get("range").map(String::as_str), Some("1mo"));
    assert_eq!(query.get("interval").map(String::as_str), Some("1d"));

    assert_eq!(series.len(), 2);
    assert!(series.points().windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(series.last().map(|p| p.close), Some(2051.5));
}

#[tokio::test]
async fn test_not_found_is_empty_series() {
    let router = Router::new().route(
        "/v8/finance/chart/{ticker}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"chart": {"result": null, "error": {
                    "code": "Not Found",
                    "description": "No data found, symbol may be delisted"
                }}})),
            )
        }),
    );
    let base = spawn_stub(router).await;

    let series = provider(base)
        .fetch_series("ZZ=F", HistoryParams::LATEST_PRICE)
        .await
        .unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn test_empty_result_is_empty_series() {
    let router = Router::new().route(
        "/v8/finance/chart/{ticker}",
        get(|| async {
            Json(json!({"chart": {"result": [{
                "meta": {"symbol": "HG=F"},
                "indicators": {"quote": [{}]}
            }], "error": null}}))
        }),
    );
    let base = spawn_stub(router).await;

    let series = provider(base)
        .fetch_series("HG=F", Timeframe::OneDay.history_params())
        .await
        .unwrap();
    assert_eq!(series.len(), 0);
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let router = Router::new().route(
        "/v8/finance/chart/{ticker}",
        get(|| async { StatusCode::BAD_GATEWAY }),
    );
    let base = spawn_stub(router).await;

    let err = provider(base)
        .fetch_series("CL=F", Timeframe::OneWeek.history_params())
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Network(_)), "got {:?}", err);
}

/// # Summary
/// 真实访问 Yahoo Finance 的冒烟测试，默认忽略。
#[tokio::test]
#[ignore]
async fn test_yahoo_real_fetch() {
    futdash_core::common::tls::install_crypto_provider();
    let provider = YahooProvider::new(&MarketConfig::default()).unwrap();

    let series = provider
        .fetch_series("GC=F", Timeframe::OneWeek.history_params())
        .await
        .unwrap();

    assert!(!series.is_empty(), "GC=F weekly series should not be empty");
    println!("Fetched {} points for GC=F", series.len());
}
