//! # `futdash-api` - 展示层
//!
//! 期货看板的 HTTP 服务入口。
//! 使用 `axum` 构建路由，`askama` 渲染单页 HTML，`utoipa` 生成 JSON 接口的 OpenAPI 文档。
//!
//! ## 架构职责
//! - 接收浏览器的选择器提交，每次提交触发一次完整刷新流水线
//! - 调用下层 `DashboardService` 获取快照
//! - 将快照转换为页面视图模型或 JSON DTO
//! - 不包含任何业务决策

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
pub mod view;
