//! # 看板 JSON 路由
//!
//! 与 HTML 单页共用同一条刷新流水线，供脚本或其他前端读取结构化快照。

use axum::Json;
use axum::extract::{Query, State};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, ApiResponse, DashboardQuery, DashboardResponse, SelectionsResponse};

/// 获取看板快照
///
/// 执行一次完整刷新：最新价、历史序列、新闻与摘要。
/// 上游故障不会导致失败，而是体现在 `notices` 中。
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "看板 (Dashboard)",
    params(DashboardQuery),
    responses(
        (status = 200, description = "刷新成功", body = ApiResponse<DashboardResponse>),
        (status = 400, description = "未知品种", body = ApiErrorResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardResponse>>, ApiError> {
    let dashboard = state
        .dashboard
        .refresh_labels(query.commodity_label(), query.timeframe_label())
        .await?;

    Ok(Json(ApiResponse::ok(dashboard.into())))
}

/// 列出可选品种与时间范围
#[utoipa::path(
    get,
    path = "/api/v1/selections",
    tag = "看板 (Dashboard)",
    responses(
        (status = 200, description = "选择器可选项", body = ApiResponse<SelectionsResponse>)
    )
)]
pub async fn list_selections() -> Json<ApiResponse<SelectionsResponse>> {
    Json(ApiResponse::ok(SelectionsResponse::all()))
}
