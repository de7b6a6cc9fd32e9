use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// # Summary
/// 看板支持的大宗商品枚举，即侧边栏 "Select Commodity" 的封闭选项集合。
///
/// # Invariants
/// - 每个变体都必须映射到一个非空的交易所期货代码。
/// - 集合是封闭的，新增品种必须同时补充 `ALL`、`label` 与 `ticker`。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Commodity {
    #[default]
    #[serde(rename = "Oil")]
    Oil,
    #[serde(rename = "Gold")]
    Gold,
    #[serde(rename = "Wheat")]
    Wheat,
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    #[serde(rename = "Copper")]
    Copper,
}

impl Commodity {
    /// 选择器中的展示顺序，首项即为默认选项。
    pub const ALL: [Commodity; 5] = [
        Commodity::Oil,
        Commodity::Gold,
        Commodity::Wheat,
        Commodity::NaturalGas,
        Commodity::Copper,
    ];

    /// 面向用户的展示名称，同时作为新闻检索关键字。
    pub fn label(&self) -> &'static str {
        match self {
            Commodity::Oil => "Oil",
            Commodity::Gold => "Gold",
            Commodity::Wheat => "Wheat",
            Commodity::NaturalGas => "Natural Gas",
            Commodity::Copper => "Copper",
        }
    }

    /// # Summary
    /// 获取该品种对应的期货合约代码 (Yahoo 连续合约格式)。
    ///
    /// # Returns
    /// 非空的 ticker，例如 `GC=F`。
    pub fn ticker(&self) -> &'static str {
        match self {
            Commodity::Oil => "CL=F",
            Commodity::Gold => "GC=F",
            Commodity::Wheat => "ZW=F",
            Commodity::NaturalGas => "NG=F",
            Commodity::Copper => "HG=F",
        }
    }

    /// # Summary
    /// 根据展示名称查找品种。
    ///
    /// # Logic
    /// 1. 去除首尾空白。
    /// 2. 忽略大小写与 `Commodity::ALL` 逐一比对。
    ///
    /// # Arguments
    /// * `label`: 用户选择的名称。
    ///
    /// # Returns
    /// 命中返回 `Some(Commodity)`，否则返回 None。
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
    }
}

impl FromStr for Commodity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ConfigError::UnknownCommodity(s.to_string()))
    }
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// # Summary
/// Ticker 解析器：将用户选择的品种名称映射为交易代码。
///
/// # Logic
/// 1. 通过 `Commodity::from_label` 在封闭集合中查找。
/// 2. 未命中视为配置错误，由调用方在请求入口处显式处理，而不是在抓取深处失败。
///
/// # Arguments
/// * `label`: 品种展示名称。
///
/// # Returns
/// 成功返回非空 ticker，失败返回 `ConfigError::UnknownCommodity`。
pub fn resolve_ticker(label: &str) -> Result<&'static str, ConfigError> {
    label.parse::<Commodity>().map(|c| c.ticker())
}

/// # Summary
/// 历史数据的回溯区间 (lookback period)。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Period {
    // 1 个交易日
    Day1,
    // 5 个交易日
    Day5,
    // 1 个月
    Month1,
}

/// # Summary
/// 历史数据的采样间隔 (sampling interval)。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Interval {
    // 5 分钟
    Minute5,
    // 1 小时
    Hour1,
    // 1 日
    Day1,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day1 => write!(f, "1d"),
            Period::Day5 => write!(f, "5d"),
            Period::Month1 => write!(f, "1mo"),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Minute5 => write!(f, "5m"),
            Interval::Hour1 => write!(f, "1h"),
            Interval::Day1 => write!(f, "1d"),
        }
    }
}

/// # Summary
/// 一次历史数据请求的参数对。
///
/// # Invariants
/// - 由 `Timeframe::history_params` 确定性地产生。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub struct HistoryParams {
    pub period: Period,
    pub interval: Interval,
}

impl HistoryParams {
    /// 最新价查询所用的参数：1 日窗口、日线采样。
    pub const LATEST_PRICE: HistoryParams = HistoryParams {
        period: Period::Day1,
        interval: Interval::Day1,
    };
}

/// # Summary
/// 看板时间范围枚举，对应侧边栏 "Select Timeframe"。
///
/// # Invariants
/// - 到 `HistoryParams` 的映射是全函数，未知标签回退到 `OneDay`。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1 Day")]
    OneDay,
    #[serde(rename = "1 Week")]
    OneWeek,
    #[serde(rename = "1 Month")]
    OneMonth,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::OneDay, Timeframe::OneWeek, Timeframe::OneMonth];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1 Day",
            Timeframe::OneWeek => "1 Week",
            Timeframe::OneMonth => "1 Month",
        }
    }

    /// # Summary
    /// 解析时间范围标签。
    ///
    /// # Logic
    /// 1. 忽略大小写与首尾空白匹配已知标签。
    /// 2. 任何无法识别的值一律回退为 `OneDay`。
    ///
    /// # Arguments
    /// * `label`: 时间范围标签，例如 "1 Week"。
    ///
    /// # Returns
    /// 始终返回一个合法的 Timeframe。
    pub fn from_label(label: &str) -> Self {
        let needle = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .unwrap_or_default()
    }

    /// # Summary
    /// 将时间范围映射为 (回溯区间, 采样间隔)。
    ///
    /// # Logic
    /// - 1 Day   → 1d / 5m
    /// - 1 Week  → 5d / 1h
    /// - 1 Month → 1mo / 1d
    ///
    /// # Returns
    /// 对应的 `HistoryParams`。
    pub fn history_params(&self) -> HistoryParams {
        match self {
            Timeframe::OneDay => HistoryParams {
                period: Period::Day1,
                interval: Interval::Minute5,
            },
            Timeframe::OneWeek => HistoryParams {
                period: Period::Day5,
                interval: Interval::Hour1,
            },
            Timeframe::OneMonth => HistoryParams {
                period: Period::Month1,
                interval: Interval::Day1,
            },
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_commodity_resolves_to_ticker() {
        for commodity in Commodity::ALL {
            let ticker = resolve_ticker(commodity.label()).unwrap();
            assert!(!ticker.is_empty(), "{} has empty ticker", commodity);
            assert_eq!(Commodity::from_label(commodity.label()), Some(commodity));
        }
    }

    #[test]
    fn test_ticker_table() {
        assert_eq!(resolve_ticker("Oil").unwrap(), "CL=F");
        assert_eq!(resolve_ticker("Gold").unwrap(), "GC=F");
        assert_eq!(resolve_ticker("Wheat").unwrap(), "ZW=F");
        assert_eq!(resolve_ticker("Natural Gas").unwrap(), "NG=F");
        assert_eq!(resolve_ticker("Copper").unwrap(), "HG=F");
        assert_eq!(resolve_ticker("  natural gas ").unwrap(), "NG=F");
    }

    #[test]
    fn test_unknown_commodity_is_config_error() {
        let err = resolve_ticker("Silver").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCommodity(ref s) if s == "Silver"));
    }

    #[test]
    fn test_timeframe_mapping() {
        let day = Timeframe::from_label("1 Day").history_params();
        assert_eq!((day.period, day.interval), (Period::Day1, Interval::Minute5));

        let week = Timeframe::from_label("1 Week").history_params();
        assert_eq!((week.period, week.interval), (Period::Day5, Interval::Hour1));

        let month = Timeframe::from_label("1 Month").history_params();
        assert_eq!((month.period, month.interval), (Period::Month1, Interval::Day1));
    }

    #[test]
    fn test_unknown_timeframe_falls_back_to_one_day() {
        for label in ["", "1 Year", "weekly", "5m"] {
            assert_eq!(Timeframe::from_label(label), Timeframe::OneDay);
            assert_eq!(
                Timeframe::from_label(label).history_params(),
                Timeframe::OneDay.history_params()
            );
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Commodity::NaturalGas).unwrap();
        assert_eq!(json, "\"Natural Gas\"");
        let tf: Timeframe = serde_json::from_str("\"1 Month\"").unwrap();
        assert_eq!(tf, Timeframe::OneMonth);
    }
}
