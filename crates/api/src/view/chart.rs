//! # 价格折线图
//!
//! 将 `PriceSeries` 投影为内联 SVG 所需的画布坐标。
//! 纯函数，不做任何 IO，模板只负责拼接字符串。

use chrono::{DateTime, Utc};
use futdash_core::market::entity::PriceSeries;

/// 画布宽度 (px)
pub const WIDTH: f64 = 960.0;
/// 画布高度 (px)
pub const HEIGHT: f64 = 500.0;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 64.0;

const Y_TICKS: u32 = 5;
const X_TICKS: i32 = 4;

/// 坐标轴刻度
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// 刻度在画布上的位置 (x 轴为横坐标，y 轴为纵坐标)
    pub pos: String,
    pub label: String,
}

/// # Summary
/// 折线图的画布几何，字段均为可直接写入 SVG 属性的字符串。
///
/// # Invariants
/// - `points` 按时间升序排列，与输入序列一一对应。
/// - 所有坐标都落在绘图区内 (`plot_left..=plot_right`, `plot_top..=plot_bottom`)。
#[derive(Debug, Clone)]
pub struct LineChart {
    /// `<polyline points="...">` 的内容
    pub points: String,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub plot_left: String,
    pub plot_right: String,
    pub plot_top: String,
    pub plot_bottom: String,
    /// x 轴标题的中心位置
    pub x_label_x: String,
    pub x_label_y: String,
    /// y 轴标题的中心位置
    pub y_label_x: String,
    pub y_label_y: String,
}

impl LineChart {
    /// # Summary
    /// 由价格序列构建折线图。
    ///
    /// # Logic
    /// 1. 空序列返回 None，页面改为显示无数据提示。
    /// 2. x 按距首个点的秒数线性映射，y 按收盘价线性映射 (价格越高越靠上)。
    /// 3. 时间跨度或价格跨度为零时 (单点或平盘)，对应轴取绘图区中线，画出水平线。
    /// 4. 生成 y 轴 5 档价格刻度与 x 轴 4 档时间刻度。
    ///
    /// # Arguments
    /// * `series`: 时间升序的收盘价序列。
    ///
    /// # Returns
    /// 图表几何，序列为空时为 None。
    pub fn build(series: &PriceSeries) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        let t0 = first.time;
        let span = elapsed_secs(t0, last.time);

        let (min, max) = series
            .points()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.close), hi.max(p.close))
            });

        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        let x_of = |secs: f64| {
            if span > 0.0 {
                MARGIN_LEFT + secs / span * plot_w
            } else {
                MARGIN_LEFT + plot_w / 2.0
            }
        };
        let y_of = |close: f64| {
            if max > min {
                MARGIN_TOP + (max - close) / (max - min) * plot_h
            } else {
                MARGIN_TOP + plot_h / 2.0
            }
        };

        let points = if series.len() == 1 {
            // 单点无法成线，沿绘图区画一条水平线
            let y = y_of(first.close);
            format!(
                "{:.1},{:.1} {:.1},{:.1}",
                MARGIN_LEFT,
                y,
                MARGIN_LEFT + plot_w,
                y
            )
        } else {
            series
                .points()
                .iter()
                .map(|p| format!("{:.1},{:.1}", x_of(elapsed_secs(t0, p.time)), y_of(p.close)))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let y_ticks = if max > min {
            (0..=Y_TICKS)
                .map(|i| {
                    let value = min + (max - min) * f64::from(i) / f64::from(Y_TICKS);
                    Tick {
                        pos: format!("{:.1}", y_of(value)),
                        label: format!("{:.2}", value),
                    }
                })
                .collect()
        } else {
            vec![Tick {
                pos: format!("{:.1}", y_of(min)),
                label: format!("{:.2}", min),
            }]
        };

        let time_fmt = if span <= 86_400.0 { "%H:%M" } else { "%b %d" };
        let x_ticks = if span > 0.0 {
            let total = last.time - t0;
            (0..=X_TICKS)
                .map(|i| {
                    let at = t0 + total * i / X_TICKS;
                    Tick {
                        pos: format!("{:.1}", x_of(elapsed_secs(t0, at))),
                        label: at.format(time_fmt).to_string(),
                    }
                })
                .collect()
        } else {
            vec![Tick {
                pos: format!("{:.1}", x_of(0.0)),
                label: t0.format(time_fmt).to_string(),
            }]
        };

        Some(Self {
            points,
            x_ticks,
            y_ticks,
            plot_left: format!("{:.1}", MARGIN_LEFT),
            plot_right: format!("{:.1}", MARGIN_LEFT + plot_w),
            plot_top: format!("{:.1}", MARGIN_TOP),
            plot_bottom: format!("{:.1}", MARGIN_TOP + plot_h),
            x_label_x: format!("{:.1}", MARGIN_LEFT + plot_w / 2.0),
            x_label_y: format!("{:.1}", HEIGHT - 12.0),
            y_label_x: "18.0".to_string(),
            y_label_y: format!("{:.1}", MARGIN_TOP + plot_h / 2.0),
        })
    }
}

// 秒级偏移足以覆盖一个月的窗口，超出 i32 的跨度按上限截断
fn elapsed_secs(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let secs = (to - from).num_seconds().max(0);
    f64::from(i32::try_from(secs).unwrap_or(i32::MAX))
}
