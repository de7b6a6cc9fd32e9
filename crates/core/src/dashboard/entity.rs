use crate::common::{Commodity, Timeframe};
use crate::market::entity::PriceSeries;
use crate::news::entity::NewsArticle;
use crate::summary::entity::Summary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Summary
/// 渲染时展示给用户的降级提示。
///
/// # Invariants
/// - 每种提示对应一个固定文案，展示层不得自行拼装。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Notice {
    // 最新价查询失败或上游无数据
    PriceUnavailable,
    // 历史序列为空
    NoHistory,
    // 新闻为空或抓取失败
    NoNews,
    // 摘要未生成
    SummaryUnavailable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PriceUnavailable => "Latest price unavailable.",
            Notice::NoHistory => "No historical data available.",
            Notice::NoNews => "No news available at the moment.",
            Notice::SummaryUnavailable => "Summary unavailable.",
        }
    }
}

/// # Summary
/// 一次完整刷新的结果快照，展示层唯一的数据来源。
///
/// # Invariants
/// - 只在单次请求内存活，不跨渲染保留。
/// - `latest_price` 为 None 时 `notices` 必含 `PriceUnavailable`，其余区块同理。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    // 选中的品种
    pub commodity: Commodity,
    // 选中的时间范围
    pub timeframe: Timeframe,
    // 解析出的合约代码
    pub ticker: String,
    // 本次刷新完成的时间
    pub generated_at: DateTime<Utc>,
    // 最新价
    pub latest_price: Option<f64>,
    // 历史收盘价序列
    pub series: PriceSeries,
    // 新闻列表 (至多 5 条)
    pub news: Vec<NewsArticle>,
    // 新闻摘要
    pub summary: Option<Summary>,
    // 降级提示
    pub notices: Vec<Notice>,
}

impl Dashboard {
    pub fn has_notice(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }
}
