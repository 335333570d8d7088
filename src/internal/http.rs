//! 请求层：拼接 URL、限长读取响应体、解析 JSON 信封、失败重试。
//!
//! 调用方显式传入 [`reqwest::Client`]，同一次运行内的所有请求复用同一连接池。

pub mod functions;
pub mod structs;
