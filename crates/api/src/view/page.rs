use askama::Template;
use futdash_core::common::{Commodity, Timeframe};
use futdash_core::dashboard::entity::{Dashboard, Notice};
use futdash_core::news::entity::NewsArticle;

use super::chart::{self, LineChart};
use super::format::{format_last_updated, format_usd};

/// 下拉框选项
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

/// 新闻条目的展示形态
#[derive(Debug, Clone)]
pub struct NewsItem {
    pub title: String,
    pub url: Option<String>,
    /// `source • YYYY-MM-DD`，缺失部分省略
    pub caption: String,
    pub description: Option<String>,
}

impl From<&NewsArticle> for NewsItem {
    fn from(article: &NewsArticle) -> Self {
        let caption = [article.source.as_deref(), article.published_date()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" • ");

        Self {
            title: article
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            url: article.url.as_deref().and_then(safe_link).map(str::to_string),
            caption,
            description: article.description.clone(),
        }
    }
}

/// 只放行 http(s) 链接，其余协议 (如 `javascript:`) 一律不生成超链接
fn safe_link(url: &str) -> Option<&str> {
    let url = url.trim();
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then_some(url)
}

/// # Summary
/// 看板单页的视图模型，所有展示文案在此预先格式化，模板内不做计算。
///
/// # Invariants
/// - `chart` 为 None 时 `history_notice` 必为 Some。
/// - 每个区块要么有内容，要么带一条降级提示，不会留白。
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub commodities: Vec<SelectOption>,
    pub timeframes: Vec<SelectOption>,
    pub commodity: &'static str,
    pub timeframe: &'static str,
    pub last_updated: String,
    pub price_text: Option<String>,
    pub price_notice: Option<&'static str>,
    pub chart: Option<LineChart>,
    pub chart_title: String,
    pub chart_width: String,
    pub chart_height: String,
    pub history_notice: Option<&'static str>,
    pub news: Vec<NewsItem>,
    pub news_notice: Option<&'static str>,
    pub summary: Option<String>,
    pub summary_notice: Option<&'static str>,
}

impl DashboardPage {
    /// # Summary
    /// 由刷新快照构建页面。
    ///
    /// # Logic
    /// 1. 按快照中的品种与时间范围标记下拉框选中项。
    /// 2. 最新价格式化为美元，不可用时给出提示。
    /// 3. 序列投影为折线图，空序列只显示无数据提示。
    /// 4. 新闻与摘要逐项转换，缺失时给出对应提示。
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let notice = |n: Notice| dashboard.has_notice(n).then(|| n.message());
        let chart = LineChart::build(&dashboard.series);

        Self {
            commodities: Commodity::ALL
                .iter()
                .map(|c| SelectOption {
                    label: c.label(),
                    selected: *c == dashboard.commodity,
                })
                .collect(),
            timeframes: Timeframe::ALL
                .iter()
                .map(|t| SelectOption {
                    label: t.label(),
                    selected: *t == dashboard.timeframe,
                })
                .collect(),
            commodity: dashboard.commodity.label(),
            timeframe: dashboard.timeframe.label(),
            last_updated: format_last_updated(dashboard.generated_at),
            price_text: dashboard.latest_price.map(format_usd),
            price_notice: notice(Notice::PriceUnavailable),
            history_notice: if chart.is_none() {
                Some(Notice::NoHistory.message())
            } else {
                None
            },
            chart,
            chart_title: format!(
                "{} Futures Price Over {}",
                dashboard.commodity.label(),
                dashboard.timeframe.label()
            ),
            chart_width: format!("{:.0}", chart::WIDTH),
            chart_height: format!("{:.0}", chart::HEIGHT),
            news: dashboard.news.iter().map(NewsItem::from).collect(),
            news_notice: notice(Notice::NoNews),
            summary: dashboard.summary.as_ref().map(|s| s.text.clone()),
            summary_notice: notice(Notice::SummaryUnavailable),
        }
    }
}
