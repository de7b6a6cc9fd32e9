//! # 路由控制器
//!
//! - `page`: 浏览器访问的 HTML 单页
//! - `dashboard`: 同源 JSON 接口，进入 OpenAPI 文档
//! - `health`: 存活探针

pub mod dashboard;
pub mod health;
pub mod page;
