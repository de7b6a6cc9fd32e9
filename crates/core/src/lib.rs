//! # `futdash-core` - 领域核心
//!
//! 定义期货看板的领域实体、端口 (Port) 契约、错误枚举与全局配置模型。
//! 本 crate 不依赖任何具体的 HTTP 实现，所有外部协作者 (行情、新闻、摘要模型)
//! 均通过 trait 抽象注入。

pub mod common;
pub mod config;

pub mod market {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod news {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod summary {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod dashboard {
    pub mod entity;
}

#[cfg(feature = "test-utils")]
pub mod testing;
