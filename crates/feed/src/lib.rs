//! # `futdash-feed` - 外部数据源适配器
//!
//! 行情 (Yahoo Finance) 与新闻 (NewsAPI.org) 的 HTTP 实现。

pub mod newsapi;
pub mod yahoo;
