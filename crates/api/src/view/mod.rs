//! # 页面视图层
//!
//! 将 `Dashboard` 快照转换为 askama 模板所需的视图模型。
//! - `chart`: 价格序列到 SVG 坐标的投影
//! - `format`: 价格与时间的展示格式
//! - `page`: 单页模板及其构建

pub mod chart;
pub mod format;
pub mod page;

pub use page::DashboardPage;
