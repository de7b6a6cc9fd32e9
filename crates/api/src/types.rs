//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向前端 JSON 输出的轻量结构体。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use futdash_core::common::{Commodity, Timeframe};
use futdash_core::dashboard::entity::Dashboard;
use futdash_core::news::entity::NewsArticle;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============================================================
//  请求参数
// ============================================================

/// 看板选择器参数，页面表单与 JSON 接口共用
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// 品种名称，缺省为 Oil
    #[param(example = "Gold")]
    pub commodity: Option<String>,
    /// 时间范围，缺省或无法识别时为 1 Day
    #[param(example = "1 Month")]
    pub timeframe: Option<String>,
}

impl DashboardQuery {
    pub fn commodity_label(&self) -> &str {
        self.commodity
            .as_deref()
            .unwrap_or_else(|| Commodity::default().label())
    }

    pub fn timeframe_label(&self) -> &str {
        self.timeframe
            .as_deref()
            .unwrap_or_else(|| Timeframe::default().label())
    }
}

// ============================================================
//  看板 DTO
// ============================================================

/// 收盘价点位 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PricePointResponse {
    /// 时间戳 (ISO 8601)
    #[schema(example = "2026-03-01T10:00:00Z")]
    pub time: String,
    /// 收盘价
    #[schema(example = 2051.5)]
    pub close: f64,
}

/// 新闻条目 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub title: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    /// 发布日期 (YYYY-MM-DD)
    #[schema(example = "2026-03-01")]
    pub published_date: Option<String>,
    pub description: Option<String>,
}

impl From<NewsArticle> for NewsResponse {
    fn from(article: NewsArticle) -> Self {
        Self {
            published_date: article.published_date().map(str::to_string),
            title: article.title,
            url: article.url,
            source: article.source,
            description: article.description,
        }
    }
}

/// 看板快照 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    #[schema(example = "Gold")]
    pub commodity: String,
    #[schema(example = "1 Month")]
    pub timeframe: String,
    #[schema(example = "GC=F")]
    pub ticker: String,
    /// 刷新完成时间 (ISO 8601)
    pub generated_at: String,
    /// 最新价，不可用时为 null
    #[schema(example = 2051.5)]
    pub latest_price: Option<f64>,
    /// 时间升序的收盘价序列
    pub points: Vec<PricePointResponse>,
    /// 至多 5 条新闻
    pub news: Vec<NewsResponse>,
    /// 新闻摘要
    pub summary: Option<String>,
    /// 降级提示文案
    #[schema(example = json!(["No news available at the moment."]))]
    pub notices: Vec<String>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(d: Dashboard) -> Self {
        Self {
            commodity: d.commodity.label().to_string(),
            timeframe: d.timeframe.label().to_string(),
            ticker: d.ticker,
            generated_at: d.generated_at.to_rfc3339(),
            latest_price: d.latest_price,
            points: d
                .series
                .points()
                .iter()
                .map(|p| PricePointResponse {
                    time: p.time.to_rfc3339(),
                    close: p.close,
                })
                .collect(),
            news: d.news.into_iter().map(NewsResponse::from).collect(),
            summary: d.summary.map(|s| s.text),
            notices: d.notices.iter().map(|n| n.message().to_string()).collect(),
        }
    }
}

/// 品种选项 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommodityOption {
    #[schema(example = "Natural Gas")]
    pub label: String,
    #[schema(example = "NG=F")]
    pub ticker: String,
}

/// 时间范围选项 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeframeOption {
    #[schema(example = "1 Week")]
    pub label: String,
    /// 回溯区间
    #[schema(example = "5d")]
    pub period: String,
    /// 采样间隔
    #[schema(example = "1h")]
    pub interval: String,
}

/// 选择器可选项 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectionsResponse {
    pub commodities: Vec<CommodityOption>,
    pub timeframes: Vec<TimeframeOption>,
}

impl SelectionsResponse {
    pub fn all() -> Self {
        Self {
            commodities: Commodity::ALL
                .iter()
                .map(|c| CommodityOption {
                    label: c.label().to_string(),
                    ticker: c.ticker().to_string(),
                })
                .collect(),
            timeframes: Timeframe::ALL
                .iter()
                .map(|t| {
                    let params = t.history_params();
                    TimeframeOption {
                        label: t.label().to_string(),
                        period: params.period.to_string(),
                        interval: params.interval.to_string(),
                    }
                })
                .collect(),
        }
    }
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 统一 API 响应包装器
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T: Serialize + ToSchema> {
    /// 是否成功
    pub success: bool,
    /// 数据载荷 (成功时)
    pub data: Option<T>,
    /// 错误信息 (失败时)
    pub error: Option<String>,
}

impl<T: Serialize + ToSchema> ApiResponse<T> {
    /// 构建成功响应
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// 构建失败响应 (不含泛型载荷)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
