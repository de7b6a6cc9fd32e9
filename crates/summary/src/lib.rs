//! # `futdash-summary` - 新闻摘要模型
//!
//! 通过 Hugging Face 推理接口调用 `facebook/bart-large-cnn`，
//! 并提供进程级缓存的模型句柄 [`cell::SummarizerCell`]。

pub mod cell;
pub mod huggingface;
