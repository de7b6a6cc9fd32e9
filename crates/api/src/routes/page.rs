//! # 看板单页路由
//!
//! `GET /` 每次请求执行一次完整刷新并渲染整页 HTML。
//! 选择器变更即提交表单，页面据新的查询参数重新生成。

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::DashboardQuery;
use crate::view::DashboardPage;

/// # Summary
/// 渲染看板单页。
///
/// # Logic
/// 1. 读取 `commodity` 与 `timeframe`，缺省为 Oil / 1 Day。
/// 2. 调用刷新流水线，未知品种返回 400。
/// 3. 构建视图模型并渲染模板。
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ApiError> {
    let dashboard = state
        .dashboard
        .refresh_labels(query.commodity_label(), query.timeframe_label())
        .await?;

    let html = DashboardPage::from_dashboard(&dashboard).render()?;
    Ok(Html(html))
}
